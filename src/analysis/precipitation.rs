//! Precipitation series builder.
//!
//! Parses, filters, groups, and averages daily precipitation records into
//! one monthly-average series per city. Grouping is an explicit two-level
//! structure — city, then calendar month — resolved to arithmetic means
//! only after every record has been ingested.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::logging::{self, Stage};
use crate::model::{CityMonthSeries, MonthKey, MonthlyPrecip, PrecipObservation, WeatherRecord};

/// Exact date pattern accepted for the `date` column. Chrono accepts both
/// zero-padded ("07/04/2014") and unpadded ("7/4/2014") digits for `%m`
/// and `%d`.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Build the per-city monthly-average precipitation series.
///
/// 1. Parse `date` (`%m/%d/%Y`) and `actual_precipitation`; drop the
///    record if either fails.
/// 2. Group by city — city order is the first occurrence of each city in
///    the input — then by calendar month within each city.
/// 3. Average each (city, month) group as sum / count in f64, unrounded.
/// 4. Emit each city's points ascending by month.
///
/// Every city with at least one surviving observation gets exactly one
/// series; months within a series are strictly increasing. Empty input
/// yields empty output.
pub fn build_precipitation_series(records: &[WeatherRecord]) -> Vec<CityMonthSeries> {
    // Two-level grouping: city (in first-occurrence order) → month → values.
    // The BTreeMap keeps each city's months sorted as they accumulate.
    let mut city_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, BTreeMap<MonthKey, Vec<f64>>> = HashMap::new();
    let mut kept = 0usize;

    for record in records {
        let Some(obs) = parse_observation(record) else {
            continue;
        };
        kept += 1;

        if !groups.contains_key(&obs.city) {
            city_order.push(obs.city.clone());
        }
        groups
            .entry(obs.city)
            .or_default()
            .entry(MonthKey::from_date(obs.date))
            .or_default()
            .push(obs.value);
    }

    logging::log_transform_summary(
        Stage::Precipitation,
        records.len(),
        kept,
        records.len() - kept,
    );

    city_order
        .into_iter()
        .map(|city| {
            let months = groups.remove(&city).unwrap_or_default();
            let points = months
                .into_iter()
                .map(|(month, values)| MonthlyPrecip {
                    month,
                    // Groups only exist because at least one observation
                    // landed in them, so count is never zero.
                    avg_precip: values.iter().sum::<f64>() / values.len() as f64,
                })
                .collect();
            CityMonthSeries { city, points }
        })
        .collect()
}

/// Parse one record into a dated observation, or `None` if the date or the
/// value is malformed. A failure here is a silent-skip condition, not an
/// error.
fn parse_observation(record: &WeatherRecord) -> Option<PrecipObservation> {
    let date = NaiveDate::parse_from_str(record.date.trim(), DATE_FORMAT).ok()?;
    let value = record.actual_precipitation.trim().parse::<f64>().ok()?;
    Some(PrecipObservation {
        city: record.city.clone(),
        date,
        value,
    })
}
