// File: html.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{ReportGenerator, ReportView};
use crate::errors::ReportResult;
use crate::metrics::format_percent;

const STYLESHEET: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 40px;
            border-radius: 10px;
            margin-bottom: 30px;
        }
        .header h1 {
            margin: 0;
            font-size: 32px;
        }
        .header p {
            margin: 10px 0 0 0;
            opacity: 0.9;
        }
        .metrics-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }
        .metric-card {
            background: white;
            padding: 25px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .metric-label {
            font-size: 14px;
            color: #666;
            text-transform: uppercase;
            letter-spacing: 1px;
            margin-bottom: 10px;
        }
        .metric-value {
            font-size: 36px;
            font-weight: bold;
            color: #333;
        }
        .metric-change {
            font-size: 14px;
            margin-top: 5px;
        }
        .positive {
            color: #10b981;
        }
        .negative {
            color: #ef4444;
        }
        .chart-container {
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
            margin-bottom: 30px;
        }
        .footer {
            text-align: center;
            padding: 20px;
            color: #666;
            font-size: 14px;
        }
"#;

pub struct HtmlGenerator;

impl HtmlGenerator {
    pub fn new() -> Self {
        Self
    }

    fn escape_html(&self, input: &str) -> String {
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn render_header(&self, view: &ReportView) -> String {
        format!(
            r#"
    <div class="header">
        <h1>{}</h1>
        <p>Domain: {} | Generated: {}</p>
    </div>
"#,
            self.escape_html(&view.report_title),
            self.escape_html(&view.domain),
            self.escape_html(&view.date)
        )
    }

    fn render_metric_card(&self, label: &str, value: u64, value_class: Option<&str>) -> String {
        let class = match value_class {
            Some(extra) => format!("metric-value {}", extra),
            None => "metric-value".to_string(),
        };

        format!(
            r#"
        <div class="metric-card">
            <div class="metric-label">{}</div>
            <div class="{}">{}</div>
        </div>
"#,
            label, class, value
        )
    }

    fn render_metric_cards(&self, view: &ReportView) -> String {
        let metrics = &view.metrics;
        let trend = metrics.trend();

        let total_card = format!(
            r#"
        <div class="metric-card">
            <div class="metric-label">Total Backlinks</div>
            <div class="metric-value">{}</div>
            <div class="metric-change {}">
                {} {} ({}%) this month
            </div>
        </div>
"#,
            metrics.current_backlinks,
            trend.css_class(),
            trend.glyph(),
            metrics.monthly_change,
            format_percent(metrics.percent_change)
        );

        format!(
            r#"
    <div class="metrics-grid">{}{}{}{}    </div>
"#,
            total_card,
            self.render_metric_card("Referring Domains", metrics.current_domains, None),
            self.render_metric_card("New Backlinks", metrics.new_this_month, Some("positive")),
            self.render_metric_card("Lost Backlinks", metrics.lost_this_month, Some("negative"))
        )
    }

    fn render_chart(&self, markup: &str) -> String {
        format!(
            r#"
    <div class="chart-container">
        {}
    </div>
"#,
            markup
        )
    }

    fn render_footer(&self) -> String {
        r#"
    <div class="footer">
        <p>This report was automatically generated by your backlink monitoring system.</p>
        <p>Data sources: RapidAPI SEO Tools, Moz Link Explorer</p>
    </div>
"#
        .to_string()
    }
}

impl ReportGenerator for HtmlGenerator {
    fn generate(&self, view: &ReportView) -> ReportResult<String> {
        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}    </style>
</head>
<body>{}{}{}{}{}</body>
</html>
"#,
            self.escape_html(&view.report_title),
            STYLESHEET,
            self.render_header(view),
            self.render_metric_cards(view),
            self.render_chart(&view.trend_chart),
            self.render_chart(&view.new_lost_chart),
            self.render_footer()
        );
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DomainAuthority;
    use crate::metrics::MetricsSnapshot;

    fn create_test_view(monthly_change: i64, percent_change: f64) -> ReportView {
        ReportView {
            report_title: "Backlink Monitoring Report".to_string(),
            domain: "example.com".to_string(),
            date: "2025-02-01".to_string(),
            metrics: MetricsSnapshot {
                current_backlinks: 120,
                current_domains: 12,
                monthly_change,
                percent_change,
                new_this_month: 25,
                lost_this_month: 5,
                domain_authority: DomainAuthority::Score(22.0),
            },
            trend_chart: r#"<div id="trend-chart"></div>"#.to_string(),
            new_lost_chart: r#"<div id="new-lost-chart"></div>"#.to_string(),
        }
    }

    #[test]
    fn test_html_generation() {
        let html = HtmlGenerator::new()
            .generate(&create_test_view(20, 20.0))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Backlink Monitoring Report</title>"));
        assert!(html.contains("Domain: example.com | Generated: 2025-02-01"));
        assert!(html.contains(r#"<div class="metric-value">120</div>"#));
        assert!(html.contains(r#"<div class="metric-value positive">25</div>"#));
        assert!(html.contains(r#"<div class="metric-value negative">5</div>"#));
        assert!(html.contains("20 (20%) this month"));
        assert!(html.contains("Data sources: RapidAPI SEO Tools, Moz Link Explorer"));
    }

    #[test]
    fn test_charts_embedded_verbatim() {
        let html = HtmlGenerator::new()
            .generate(&create_test_view(20, 20.0))
            .unwrap();

        assert!(html.contains(r#"<div id="trend-chart"></div>"#));
        assert!(html.contains(r#"<div id="new-lost-chart"></div>"#));
        assert_eq!(html.matches(r#"class="chart-container""#).count(), 2);
    }

    #[test]
    fn test_increase_styling() {
        let html = HtmlGenerator::new()
            .generate(&create_test_view(20, 20.0))
            .unwrap();
        assert!(html.contains(r#"class="metric-change positive""#));
        assert!(html.contains("▲ 20"));
        assert!(!html.contains("▼"));
    }

    #[test]
    fn test_decrease_styling() {
        let html = HtmlGenerator::new()
            .generate(&create_test_view(-10, -4.55))
            .unwrap();
        assert!(html.contains(r#"class="metric-change negative""#));
        assert!(html.contains("▼ -10 (-4.55%) this month"));
        assert!(!html.contains("▲"));
    }

    #[test]
    fn test_zero_change_renders_as_increase() {
        let html = HtmlGenerator::new()
            .generate(&create_test_view(0, 0.0))
            .unwrap();
        assert!(html.contains(r#"class="metric-change positive""#));
        assert!(html.contains("▲ 0 (0%) this month"));
        assert!(!html.contains(r#"class="metric-change negative""#));
    }

    #[test]
    fn test_presentation_text_is_escaped() {
        let mut view = create_test_view(1, 1.0);
        view.report_title = "Links <&> \"Co\"".to_string();
        view.domain = "<script>".to_string();

        let html = HtmlGenerator::new().generate(&view).unwrap();
        assert!(html.contains("Links &lt;&amp;&gt; &quot;Co&quot;"));
        assert!(html.contains("Domain: &lt;script&gt;"));
    }
}
