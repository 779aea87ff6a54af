//! Core data types for the weather trends report generator.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no I/O and no transformation logic — only types and the
//! conversions that belong to them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// One row of the weather-history CSV, untyped.
///
/// Every field is kept as text; numeric and date typing happens in the
/// builders so that a bad value drops one record instead of failing the
/// whole load. Columns beyond these five are ignored by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub date: String,
    pub actual_precipitation: String,
    pub record_max_temp: String,
    pub record_max_temp_year: String,
}

// ---------------------------------------------------------------------------
// Temperature dataset
// ---------------------------------------------------------------------------

/// One point of the record-max-temperature-by-year series.
///
/// Exists only when both `record_max_temp_year` and `record_max_temp`
/// parsed successfully; immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub year: i32,
    pub temp: f64,
}

// ---------------------------------------------------------------------------
// Precipitation dataset
// ---------------------------------------------------------------------------

/// A single valid daily precipitation observation, before aggregation.
///
/// Intermediate form between raw rows and `CityMonthSeries`: the date has
/// already parsed from `%m/%d/%Y` and the value is a valid number.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipObservation {
    pub city: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// A calendar month, decomposed as (year, month).
///
/// Grouping key for monthly aggregation. Decomposing the date — rather than
/// slicing a formatted string — keeps the truncation independent of any
/// display format. Ordering is year-major, so the derived `Ord` sorts
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Truncate a date to its month.
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month, for plotting on a time axis.
    ///
    /// `month` is always 1..=12 when constructed via `from_date`, so the
    /// conversion cannot fail for keys produced by the pipeline.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Average precipitation for one (city, month) group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyPrecip {
    pub month: MonthKey,
    pub avg_precip: f64,
}

/// The monthly-average precipitation series for one city.
///
/// `points` is strictly ascending by month with one entry per distinct
/// month observed for the city. Series order across cities follows the
/// first occurrence of each city in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMonthSeries {
    pub city: String,
    pub points: Vec<MonthlyPrecip>,
}

// ---------------------------------------------------------------------------
// Combined output
// ---------------------------------------------------------------------------

/// Both plot-ready datasets, as handed to the verifier and renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Datasets {
    pub temperature: Vec<TemperaturePoint>,
    pub precipitation: Vec<CityMonthSeries>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort a report run.
///
/// Per-record parse failures never appear here — those drop the record and
/// the pipeline continues. These variants cover the fatal cases: unreadable
/// input, bad configuration, and renderer backend failures.
#[derive(Debug)]
pub enum ReportError {
    /// The CSV source could not be opened or a row could not be read.
    /// A header missing a required column surfaces here on the first row.
    CsvError(String),
    /// The TOML config file was present but unreadable or invalid.
    ConfigError(String),
    /// The charting backend failed to produce an SVG document.
    RenderError(String),
    /// A JSON artifact could not be serialized.
    JsonError(String),
    /// An output artifact could not be written.
    IoError(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            ReportError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ReportError::RenderError(msg) => write!(f, "Render error: {}", msg),
            ReportError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            ReportError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::IoError(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvError(err.to_string())
    }
}
