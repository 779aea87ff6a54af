//! Weather-history CSV loader.
//!
//! Reads rows of untyped string fields from a delimited source. Columns
//! are addressed by header name, so column order does not matter and
//! columns beyond the five the pipeline uses are ignored. Field typing is
//! deliberately NOT done here — a record with a bad value must drop out of
//! one dataset without affecting the other, so both builders receive the
//! same raw rows.
//!
//! A missing source file or a header missing a required column is fatal:
//! the pipeline never sees a dataset and produces no output.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::logging::{self, Stage};
use crate::model::{ReportError, WeatherRecord};

/// Read all records from an open CSV source.
///
/// The first row is the header. A header without one of the required
/// columns surfaces as a `CsvError` on the first data row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<WeatherRecord>, ReportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: WeatherRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Load all records from a CSV file on disk.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<WeatherRecord>, ReportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ReportError::CsvError(format!("failed to open {}: {}", path.display(), e))
    })?;

    let records = read_records(file)?;
    logging::info(
        Stage::Loader,
        &format!("Loaded {} records from {}", records.len(), path.display()),
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,city,actual_precipitation,record_max_temp,record_max_temp_year";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_reads_rows_as_text() {
        let text = csv_with_rows(&["7/1/2014,Seattle,0.5,95,1942"]);
        let records = read_records(text.as_bytes()).expect("valid CSV should load");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, "Seattle");
        assert_eq!(records[0].date, "7/1/2014");
        assert_eq!(records[0].actual_precipitation, "0.5");
        assert_eq!(records[0].record_max_temp, "95");
        assert_eq!(records[0].record_max_temp_year, "1942");
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = read_records(HEADER.as_bytes()).expect("header-only CSV should load");
        assert!(records.is_empty());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let text = "date,city,actual_mean_temp,actual_precipitation,record_max_temp,record_max_temp_year\n\
                    7/1/2014,Austin,85,0.0,103,1954";
        let records = read_records(text.as_bytes()).expect("extra columns should be ignored");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, "Austin");
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let text = "record_max_temp_year,record_max_temp,actual_precipitation,city,date\n\
                    1936,108,0.0,Phoenix,7/1/2014";
        let records = read_records(text.as_bytes()).expect("reordered columns should load");
        assert_eq!(records[0].city, "Phoenix");
        assert_eq!(records[0].record_max_temp_year, "1936");
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        // No `city` column at all — the loader must refuse the whole file
        // rather than silently producing records with empty cities.
        let text = "date,actual_precipitation,record_max_temp,record_max_temp_year\n\
                    7/1/2014,0.5,95,1942";
        let result = read_records(text.as_bytes());
        assert!(result.is_err(), "malformed header should fail the load, got {:?}", result);
    }

    #[test]
    fn test_unparseable_values_still_load_as_text() {
        // "NA" and a garbage date are loader-valid; the builders decide
        // what to drop.
        let text = csv_with_rows(&["not-a-date,Seattle,T,NA,unknown"]);
        let records = read_records(text.as_bytes()).expect("untyped fields always load");
        assert_eq!(records[0].record_max_temp, "NA");
        assert_eq!(records[0].date, "not-a-date");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let text = csv_with_rows(&["7/1/2014,  Seattle , 0.5 , 95 , 1942 "]);
        let records = read_records(text.as_bytes()).expect("valid CSV should load");
        assert_eq!(records[0].city, "Seattle");
        assert_eq!(records[0].record_max_temp, "95");
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = load_records("no/such/weather.csv");
        assert!(result.is_err());
    }
}
