//! Data ingest for the report pipeline.
//!
//! Submodules:
//! - `weather_csv` — reads the weather-history CSV into raw records.

pub mod weather_csv;
