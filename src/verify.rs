//! Dataset Verification Module
//!
//! Checks the built datasets against the pipeline's output guarantees
//! before they reach the renderer: the temperature series must be sorted
//! by year, each city's months must be strictly increasing, and no city
//! may appear twice. The builders guarantee all of this by construction,
//! so a failed check means a pipeline bug, not bad input data — which is
//! exactly why it is worth a cheap pass over the output.

use chrono::Utc;
use serde::Serialize;

use crate::logging::{self, Stage};
use crate::model::{CityMonthSeries, ReportError, TemperaturePoint};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub timestamp: String,
    pub temperature: TemperatureVerification,
    pub precipitation: PrecipitationVerification,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub checks_total: usize,
    pub checks_passed: usize,
    pub checks_failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureVerification {
    pub status: VerificationStatus,
    pub point_count: usize,
    pub sorted_by_year: bool,
    pub violations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrecipitationVerification {
    pub status: VerificationStatus,
    pub city_count: usize,
    pub point_count: usize,
    pub cities_unique: bool,
    pub months_strictly_ascending: bool,
    pub violations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationStatus {
    Success,
    Failed,
}

impl VerificationReport {
    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.summary.checks_failed == 0
    }
}

// ============================================================================
// Temperature Dataset Checks
// ============================================================================

pub fn verify_temperature(points: &[TemperaturePoint]) -> TemperatureVerification {
    let mut result = TemperatureVerification {
        status: VerificationStatus::Success,
        point_count: points.len(),
        sorted_by_year: true,
        violations: Vec::new(),
    };

    for (i, pair) in points.windows(2).enumerate() {
        if pair[0].year > pair[1].year {
            result.sorted_by_year = false;
            result.violations.push(format!(
                "year {} at position {} precedes year {} at position {}",
                pair[1].year,
                i + 1,
                pair[0].year,
                i
            ));
        }
    }

    if !result.violations.is_empty() {
        result.status = VerificationStatus::Failed;
    }

    result
}

// ============================================================================
// Precipitation Dataset Checks
// ============================================================================

pub fn verify_precipitation(series: &[CityMonthSeries]) -> PrecipitationVerification {
    let mut result = PrecipitationVerification {
        status: VerificationStatus::Success,
        city_count: series.len(),
        point_count: series.iter().map(|s| s.points.len()).sum(),
        cities_unique: true,
        months_strictly_ascending: true,
        violations: Vec::new(),
    };

    // Duplicate city names
    let mut seen: Vec<&str> = Vec::new();
    for entry in series {
        if seen.contains(&entry.city.as_str()) {
            result.cities_unique = false;
            result
                .violations
                .push(format!("city {} appears more than once", entry.city));
        }
        seen.push(&entry.city);
    }

    // Month ordering - strict, so duplicate months also fail here
    for entry in series {
        for pair in entry.points.windows(2) {
            if pair[0].month >= pair[1].month {
                result.months_strictly_ascending = false;
                result.violations.push(format!(
                    "{}: month {} does not strictly precede {}",
                    entry.city, pair[0].month, pair[1].month
                ));
            }
        }
    }

    if !result.violations.is_empty() {
        result.status = VerificationStatus::Failed;
    }

    result
}

// ============================================================================
// Full Verification Runner
// ============================================================================

pub fn verify_datasets(
    temperature: &[TemperaturePoint],
    precipitation: &[CityMonthSeries],
) -> VerificationReport {
    let temp_result = verify_temperature(temperature);
    let precip_result = verify_precipitation(precipitation);

    // One check per invariant: temperature sort, city uniqueness, month order.
    let outcomes = [
        temp_result.sorted_by_year,
        precip_result.cities_unique,
        precip_result.months_strictly_ascending,
    ];
    let checks_passed = outcomes.iter().filter(|ok| **ok).count();

    let report = VerificationReport {
        timestamp: Utc::now().to_rfc3339(),
        temperature: temp_result,
        precipitation: precip_result,
        summary: VerificationSummary {
            checks_total: outcomes.len(),
            checks_passed,
            checks_failed: outcomes.len() - checks_passed,
        },
    };

    for violation in report
        .temperature
        .violations
        .iter()
        .chain(&report.precipitation.violations)
    {
        logging::warn(Stage::Verify, violation);
    }

    report
}

pub fn print_summary(report: &VerificationReport) {
    println!("───────────────────────────────────────────────");
    println!("DATASET VERIFICATION");
    println!("───────────────────────────────────────────────");
    println!(
        "Temperature:   {:?} ({} points)",
        report.temperature.status, report.temperature.point_count
    );
    println!(
        "Precipitation: {:?} ({} cities, {} points)",
        report.precipitation.status,
        report.precipitation.city_count,
        report.precipitation.point_count
    );
    println!(
        "Checks: {}/{} passed",
        report.summary.checks_passed, report.summary.checks_total
    );
    println!("───────────────────────────────────────────────");
}

/// Serialize the report to pretty JSON and write it to `path`.
pub fn save_report(report: &VerificationReport, path: &str) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| ReportError::JsonError(e.to_string()))?;
    std::fs::write(path, json)?;
    logging::info(Stage::Verify, &format!("Verification report saved to {}", path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthKey, MonthlyPrecip};

    fn point(year: i32, temp: f64) -> TemperaturePoint {
        TemperaturePoint { year, temp }
    }

    fn series(city: &str, months: &[(i32, u32)]) -> CityMonthSeries {
        CityMonthSeries {
            city: city.to_string(),
            points: months
                .iter()
                .map(|&(year, month)| MonthlyPrecip {
                    month: MonthKey { year, month },
                    avg_precip: 1.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_sorted_temperature_passes() {
        let points = vec![point(1931, 104.0), point(1954, 99.0), point(1954, 101.0)];
        let result = verify_temperature(&points);
        assert_eq!(result.status, VerificationStatus::Success);
        assert!(result.sorted_by_year);
    }

    #[test]
    fn test_unsorted_temperature_fails() {
        let points = vec![point(1954, 99.0), point(1931, 104.0)];
        let result = verify_temperature(&points);
        assert_eq!(result.status, VerificationStatus::Failed);
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn test_duplicate_month_fails_strict_ordering() {
        let data = vec![series("Austin", &[(2014, 2), (2014, 2)])];
        let result = verify_precipitation(&data);
        assert!(!result.months_strictly_ascending);
        assert_eq!(result.status, VerificationStatus::Failed);
    }

    #[test]
    fn test_duplicate_city_fails() {
        let data = vec![series("Austin", &[(2014, 2)]), series("Austin", &[(2014, 3)])];
        let result = verify_precipitation(&data);
        assert!(!result.cities_unique);
    }

    #[test]
    fn test_empty_datasets_pass() {
        let report = verify_datasets(&[], &[]);
        assert!(report.passed(), "empty outputs are valid outputs");
        assert_eq!(report.summary.checks_passed, report.summary.checks_total);
    }

    #[test]
    fn test_report_counts_points() {
        let temp = vec![point(1931, 104.0)];
        let precip = vec![
            series("Seattle", &[(2014, 1), (2014, 2)]),
            series("Austin", &[(2014, 1)]),
        ];
        let report = verify_datasets(&temp, &precip);
        assert_eq!(report.temperature.point_count, 1);
        assert_eq!(report.precipitation.city_count, 2);
        assert_eq!(report.precipitation.point_count, 3);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = verify_datasets(&[point(1931, 104.0)], &[series("Austin", &[(2014, 2)])]);
        let json = serde_json::to_string(&report).expect("report must serialize");
        assert!(json.contains("\"checks_total\":3"));
    }
}
