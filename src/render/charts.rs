//! The two line charts, drawn with plotters' SVG backend.
//!
//! Domain rules: the temperature y-axis is padded five degrees past the
//! data on both sides, and the precipitation y-axis runs from zero to
//! 110% of the largest monthly average. Empty datasets draw an empty
//! chart frame over fallback unit domains rather than erroring, which
//! keeps the report page intact.

use std::ops::Range;

use chrono::NaiveDate;
use plotters::prelude::*;

use crate::config::ChartGeometry;
use crate::model::{CityMonthSeries, ReportError, TemperaturePoint};

/// Line color of the temperature series.
const TEMP_COLOR: RGBColor = RGBColor(45, 120, 158);

fn render_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::RenderError(err.to_string())
}

// ---------------------------------------------------------------------------
// Temperature chart
// ---------------------------------------------------------------------------

/// Draw the record-max-temperature-by-year chart into an SVG string.
pub fn temperature_chart(
    points: &[TemperaturePoint],
    geometry: &ChartGeometry,
) -> Result<String, ReportError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (geometry.width, geometry.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let (year_range, temp_range) = temperature_domain(points);

        let mut chart = ChartBuilder::on(&root)
            .caption("Record Max Temperature by Year", ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(56)
            .build_cartesian_2d(year_range, temp_range)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Record Max Temperature (°F)")
            .x_label_formatter(&|year: &i32| year.to_string())
            .draw()
            .map_err(render_err)?;

        if !points.is_empty() {
            chart
                .draw_series(LineSeries::new(
                    points.iter().map(|p| (p.year, p.temp)),
                    &TEMP_COLOR,
                ))
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Axis domains for the temperature chart: x spans the year extent, y is
/// padded five degrees past the data on both sides.
fn temperature_domain(points: &[TemperaturePoint]) -> (Range<i32>, Range<f64>) {
    if points.is_empty() {
        return (0..1, 0.0..1.0);
    }

    let mut min_year = i32::MAX;
    let mut max_year = i32::MIN;
    let mut min_temp = f64::INFINITY;
    let mut max_temp = f64::NEG_INFINITY;
    for p in points {
        min_year = min_year.min(p.year);
        max_year = max_year.max(p.year);
        min_temp = min_temp.min(p.temp);
        max_temp = max_temp.max(p.temp);
    }

    // A single distinct year would collapse the x-axis to a point.
    if min_year == max_year {
        max_year += 1;
    }

    (min_year..max_year, (min_temp - 5.0)..(max_temp + 5.0))
}

// ---------------------------------------------------------------------------
// Precipitation chart
// ---------------------------------------------------------------------------

/// Draw the monthly-average precipitation chart into an SVG string: one
/// line per city, palette-assigned colors, legend of city names.
pub fn precipitation_chart(
    series: &[CityMonthSeries],
    geometry: &ChartGeometry,
) -> Result<String, ReportError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (geometry.width, geometry.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let (month_range, precip_range) = precipitation_domain(series);

        let mut chart = ChartBuilder::on(&root)
            .caption("Average Monthly Precipitation by City", ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(56)
            .build_cartesian_2d(month_range, precip_range)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Average Monthly Precipitation")
            .x_label_formatter(&|date: &NaiveDate| date.format("%Y-%m").to_string())
            .draw()
            .map_err(render_err)?;

        for (idx, entry) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let line: Vec<(NaiveDate, f64)> = entry
                .points
                .iter()
                .filter_map(|p| p.month.first_day().map(|day| (day, p.avg_precip)))
                .collect();

            chart
                .draw_series(LineSeries::new(line, &color))
                .map_err(render_err)?
                .label(entry.city.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color)
                });
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Axis domains for the precipitation chart: x spans the month extent
/// across all cities, y runs from zero to 110% of the largest average.
fn precipitation_domain(series: &[CityMonthSeries]) -> (Range<NaiveDate>, Range<f64>) {
    let months = series.iter().flat_map(|s| &s.points);
    let days: Vec<NaiveDate> = months.filter_map(|p| p.month.first_day()).collect();

    let (start, mut end) = match (days.iter().min(), days.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        // No data: one arbitrary month as a unit domain.
        _ => (
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap_or_default(),
            NaiveDate::from_ymd_opt(2014, 2, 1).unwrap_or_default(),
        ),
    };
    if start == end {
        end = start + chrono::Months::new(1);
    }

    let max_precip = series
        .iter()
        .flat_map(|s| &s.points)
        .map(|p| p.avg_precip)
        .fold(f64::NEG_INFINITY, f64::max);
    let precip_top = if max_precip.is_finite() && max_precip > 0.0 {
        max_precip * 1.1
    } else {
        1.0
    };

    (start..end, 0.0..precip_top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthKey, MonthlyPrecip};

    fn geometry() -> ChartGeometry {
        ChartGeometry { width: 400, height: 300 }
    }

    fn city(name: &str, months: &[(i32, u32, f64)]) -> CityMonthSeries {
        CityMonthSeries {
            city: name.to_string(),
            points: months
                .iter()
                .map(|&(year, month, avg_precip)| MonthlyPrecip {
                    month: MonthKey { year, month },
                    avg_precip,
                })
                .collect(),
        }
    }

    #[test]
    fn test_temperature_chart_produces_svg() {
        let points = vec![
            TemperaturePoint { year: 1931, temp: 104.0 },
            TemperaturePoint { year: 1954, temp: 99.0 },
        ];
        let svg = temperature_chart(&points, &geometry()).expect("chart should render");
        assert!(svg.contains("<svg"), "output should be an SVG document");
        assert!(svg.contains("Year"), "x-axis label should be drawn");
    }

    #[test]
    fn test_temperature_chart_renders_empty_frame_on_no_data() {
        let svg = temperature_chart(&[], &geometry()).expect("empty dataset is not an error");
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_temperature_domain_pads_five_degrees() {
        let points = vec![
            TemperaturePoint { year: 1931, temp: 100.0 },
            TemperaturePoint { year: 1954, temp: 90.0 },
        ];
        let (years, temps) = temperature_domain(&points);
        assert_eq!(years, 1931..1954);
        assert_eq!(temps, 85.0..105.0);
    }

    #[test]
    fn test_temperature_domain_widens_single_year() {
        let points = vec![TemperaturePoint { year: 1950, temp: 100.0 }];
        let (years, _) = temperature_domain(&points);
        assert!(years.start < years.end, "x domain must not collapse");
    }

    #[test]
    fn test_precipitation_chart_produces_svg_with_legend() {
        let data = vec![
            city("Seattle", &[(2014, 7, 0.5), (2014, 8, 0.7)]),
            city("Austin", &[(2014, 7, 0.1), (2014, 8, 0.2)]),
        ];
        let svg = precipitation_chart(&data, &geometry()).expect("chart should render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Seattle"), "legend should name each city");
        assert!(svg.contains("Austin"));
    }

    #[test]
    fn test_precipitation_chart_renders_empty_frame_on_no_data() {
        let svg = precipitation_chart(&[], &geometry()).expect("empty dataset is not an error");
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_precipitation_domain_scales_to_largest_average() {
        let data = vec![city("Seattle", &[(2014, 7, 2.0), (2014, 9, 4.0)])];
        let (months, precip) = precipitation_domain(&data);
        assert_eq!(months.start, NaiveDate::from_ymd_opt(2014, 7, 1).unwrap());
        assert_eq!(months.end, NaiveDate::from_ymd_opt(2014, 9, 1).unwrap());
        assert_eq!(precip.start, 0.0);
        assert!((precip.end - 4.4).abs() < 1e-12);
    }

    #[test]
    fn test_precipitation_domain_widens_single_month() {
        let data = vec![city("Seattle", &[(2014, 7, 2.0)])];
        let (months, _) = precipitation_domain(&data);
        assert!(months.start < months.end, "x domain must not collapse");
    }
}
