//! Weather trends report generator.
//!
//! Reads a weather-history CSV and renders two static line charts —
//! record max temperature by year, and average monthly precipitation per
//! city — into a single HTML page. The engineered core is the pure
//! transformation from raw rows to the two plot-ready datasets; chart
//! math (scales, axes, paths) is delegated to the `plotters` crate.
//!
//! Pipeline: `ingest` → `analysis` (temperature + precipitation builders)
//! → `verify` → `render`.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod render;
pub mod verify;
