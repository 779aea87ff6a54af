//! HTML report page assembly.
//!
//! A heading and one section per chart, with both SVG documents inlined
//! so the report is a single self-contained file.

/// Assemble the report page around the two rendered charts.
pub fn render_page(temperature_svg: &str, precipitation_svg: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <title>Weather Trends</title>\n");
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: sans-serif; margin: 2em auto; max-width: 960px; }\n");
    html.push_str("    section { margin-bottom: 3em; }\n");
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("  <h1>Weather Trends</h1>\n");
    html.push_str("  <section id=\"temperature-chart\">\n");
    html.push_str(temperature_svg);
    html.push_str("\n  </section>\n");
    html.push_str("  <section id=\"precipitation-chart\">\n");
    html.push_str(precipitation_svg);
    html.push_str("\n  </section>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_both_charts() {
        let page = render_page("<svg id=\"t\"></svg>", "<svg id=\"p\"></svg>");
        assert!(page.contains("<svg id=\"t\"></svg>"));
        assert!(page.contains("<svg id=\"p\"></svg>"));
        let temp_pos = page.find("temperature-chart").unwrap();
        let precip_pos = page.find("precipitation-chart").unwrap();
        assert!(temp_pos < precip_pos, "temperature chart comes first");
    }

    #[test]
    fn test_page_is_a_complete_document() {
        let page = render_page("", "");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
