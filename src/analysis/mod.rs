//! Data transformation for the report pipeline.
//!
//! Turns flat loader output into the two plot-ready datasets. Both
//! builders are pure functions over the same record slice: they parse and
//! type the fields they need, silently drop records that fail, and never
//! touch I/O. Scale, axis, and path math belongs to the renderer's
//! charting library, not here.
//!
//! Submodules:
//! - `temperature` — yearly record-max-temperature series (sorted, decimated).
//! - `precipitation` — per-city monthly-average precipitation series.

pub mod precipitation;
pub mod temperature;
