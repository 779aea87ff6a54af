//! Temperature series builder.
//!
//! Parses, filters, sorts, and decimates yearly record-max-temperature
//! points from the raw records. The resulting series is what the
//! temperature chart plots directly.

use crate::logging::{self, Stage};
use crate::model::{TemperaturePoint, WeatherRecord};

/// Keep every Nth point of the sorted series.
///
/// Decimation is by post-sort position, not by distinct year: two records
/// sharing a year occupy two positions, and which of them lands on a kept
/// index depends on their input order. The stable sort makes the outcome
/// deterministic for a given input sequence.
pub const DECIMATION_STRIDE: usize = 10;

/// Build the record-max-temperature-by-year series.
///
/// 1. Parse `record_max_temp_year` as an integer and `record_max_temp` as
///    a float; drop the record if either fails.
/// 2. Sort ascending by year, preserving input order for equal years.
/// 3. Keep positions 0, 10, 20, … of the sorted sequence.
///
/// Output is sorted ascending by year and holds `ceil(N / 10)` points for
/// N valid records. Empty input yields empty output.
pub fn build_temperature_series(records: &[WeatherRecord]) -> Vec<TemperaturePoint> {
    let mut points: Vec<TemperaturePoint> = records
        .iter()
        .filter_map(parse_point)
        .collect();

    logging::log_transform_summary(
        Stage::Temperature,
        records.len(),
        points.len(),
        records.len() - points.len(),
    );

    // Vec::sort_by_key is stable: equal years keep their input order.
    points.sort_by_key(|p| p.year);

    points
        .into_iter()
        .step_by(DECIMATION_STRIDE)
        .collect()
}

/// Parse one record into a temperature point, or `None` if either numeric
/// field is missing or malformed. A failure here is a silent-skip
/// condition, not an error.
fn parse_point(record: &WeatherRecord) -> Option<TemperaturePoint> {
    let year = record.record_max_temp_year.trim().parse::<i32>().ok()?;
    let temp = record.record_max_temp.trim().parse::<f64>().ok()?;
    Some(TemperaturePoint { year, temp })
}
