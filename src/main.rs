//! Report generator binary.
//!
//! One-shot batch run: load config, read the CSV, build both datasets,
//! verify their invariants, render the HTML report. Usage:
//!
//!   wxtrends [config.toml]
//!
//! The config path defaults to `./wxtrends.toml`; a missing config file
//! runs with built-in defaults against the bundled sample data.

use std::error::Error;
use std::process::ExitCode;

use wxtrends::analysis::{precipitation, temperature};
use wxtrends::config;
use wxtrends::ingest::weather_csv;
use wxtrends::logging::{self, LogLevel, Stage};
use wxtrends::model::Datasets;
use wxtrends::render;
use wxtrends::verify;

const DEFAULT_CONFIG_PATH: &str = "wxtrends.toml";

fn main() -> ExitCode {
    match run() {
        Ok(verified) => {
            if verified {
                ExitCode::SUCCESS
            } else {
                // Artifacts were written, but an output invariant failed.
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("wxtrends: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = config::load_config(&config_path)?;

    logging::init_logger(LogLevel::Info, config.log_file.as_deref(), true);
    logging::info(
        Stage::System,
        &format!("Starting report run: {} -> {}", config.input_csv, config.output_html),
    );

    // Load once; both builders consume the same raw rows.
    let records = weather_csv::load_records(&config.input_csv)?;

    let datasets = Datasets {
        temperature: temperature::build_temperature_series(&records),
        precipitation: precipitation::build_precipitation_series(&records),
    };

    let report = verify::verify_datasets(&datasets.temperature, &datasets.precipitation);
    verify::print_summary(&report);
    if let Some(path) = &config.verification_report {
        verify::save_report(&report, path)?;
    }

    if let Some(path) = &config.datasets_json {
        let json = serde_json::to_string_pretty(&datasets)?;
        std::fs::write(path, json)?;
        logging::info(Stage::System, &format!("Datasets saved to {}", path));
    }

    let page = render::render_report(&datasets, &config.chart)?;
    std::fs::write(&config.output_html, page)?;
    logging::info(
        Stage::Render,
        &format!("Report written to {}", config.output_html),
    );

    if !report.passed() {
        logging::error(Stage::Verify, "Dataset verification failed; see report above");
    }

    Ok(report.passed())
}
