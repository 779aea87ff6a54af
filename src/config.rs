//! Run configuration, loaded from a TOML file.
//!
//! The binary reads `./wxtrends.toml` by default (path overridable on the
//! command line). A missing file falls back to the built-in defaults so a
//! checkout with the bundled sample data runs with no setup; a file that
//! exists but does not parse is a fatal error.

use serde::Deserialize;
use std::path::Path;

use crate::model::ReportError;

/// Chart surface size in pixels, shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        ChartGeometry {
            width: 900,
            height: 400,
        }
    }
}

/// Top-level configuration for one report run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weather-history CSV to read.
    #[serde(default = "default_input_csv")]
    pub input_csv: String,
    /// HTML report page to write.
    #[serde(default = "default_output_html")]
    pub output_html: String,
    /// Optional path for the dataset verification report (JSON).
    #[serde(default)]
    pub verification_report: Option<String>,
    /// Optional path for a JSON dump of both plot-ready datasets.
    #[serde(default)]
    pub datasets_json: Option<String>,
    /// Optional log file; console logging happens regardless.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub chart: ChartGeometry,
}

fn default_input_csv() -> String {
    "data/weather_sample.csv".to_string()
}

fn default_output_html() -> String {
    "weather_report.html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_csv: default_input_csv(),
            output_html: default_output_html(),
            verification_report: None,
            datasets_json: None,
            log_file: None,
            chart: ChartGeometry::default(),
        }
    }
}

/// Parse a configuration document.
pub fn parse_config(text: &str) -> Result<Config, ReportError> {
    toml::from_str(text).map_err(|e| ReportError::ConfigError(e.to_string()))
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &str) -> Result<Config, ReportError> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| ReportError::ConfigError(format!("failed to read {}: {}", path, e)))?;
    parse_config(&text)
}
