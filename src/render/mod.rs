//! Report rendering.
//!
//! Consumes the plot-ready datasets and produces the HTML report page.
//! All scale computation, axis tick layout, and path interpolation is
//! delegated to the `plotters` crate; this module only wires datasets
//! into library calls and assembles the output document.
//!
//! Submodules:
//! - `charts` — the two line charts, drawn to SVG strings.
//! - `page` — the HTML page embedding both charts.

pub mod charts;
pub mod page;

use crate::config::ChartGeometry;
use crate::logging::{self, Stage};
use crate::model::{Datasets, ReportError};

/// Render both charts and assemble the report page.
pub fn render_report(datasets: &Datasets, geometry: &ChartGeometry) -> Result<String, ReportError> {
    let temperature_svg = charts::temperature_chart(&datasets.temperature, geometry)?;
    let precipitation_svg = charts::precipitation_chart(&datasets.precipitation, geometry)?;

    logging::info(
        Stage::Render,
        &format!(
            "Rendered {} temperature points and {} city series",
            datasets.temperature.len(),
            datasets.precipitation.len()
        ),
    );

    Ok(page::render_page(&temperature_svg, &precipitation_svg))
}
