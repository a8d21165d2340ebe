// File: charts.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

//! Embeddable plotly.js charts built from the backlink history.

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::ReportResult;
use crate::history::{HistoricalRecord, HistoricalSeries};

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const NEW_VS_LOST_WINDOW: usize = 6;

const CHART_HEIGHT: u32 = 400;
const COLOR_BLUE: &str = "#3b82f6";
const COLOR_GREEN: &str = "#10b981";
const COLOR_RED: &str = "#ef4444";

pub trait ChartRenderer {
    fn element_id(&self) -> &'static str;
    fn figure(&self, series: &HistoricalSeries) -> Figure;

    fn render(&self, series: &HistoricalSeries) -> ReportResult<String> {
        self.figure(series).to_html(self.element_id())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Renders a `<div>` fragment plus the script that draws into it.
    pub fn to_html(&self, element_id: &str) -> ReportResult<String> {
        let data = serde_json::to_string(&self.data)?;
        let layout = serde_json::to_string(&self.layout)?;

        Ok(format!(
            r#"<div>
    <script type="text/javascript" src="{cdn}" charset="utf-8"></script>
    <div id="{id}" class="plotly-graph-div" style="height:{height}px; width:100%;"></div>
    <script type="text/javascript">
        window.PLOTLYENV = window.PLOTLYENV || {{}};
        if (document.getElementById("{id}")) {{
            Plotly.newPlot("{id}", {data}, {layout}, {{"responsive": true}});
        }}
    </script>
</div>"#,
            cdn = PLOTLY_CDN,
            id = element_id,
            height = CHART_HEIGHT,
            data = data,
            layout = layout,
        ))
    }
}

fn dates(records: &[HistoricalRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect()
}

fn base_layout(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": "Date" }, "gridcolor": "#ebf0f8" },
        "yaxis": { "title": { "text": "Count" }, "gridcolor": "#ebf0f8" },
        "plot_bgcolor": "white",
        "paper_bgcolor": "white",
        "height": CHART_HEIGHT,
    })
}

pub struct TrendChart;

impl TrendChart {
    pub fn new() -> Self {
        Self
    }

    fn line_trace(name: &str, x: &[String], y: Vec<u64>, color: &str) -> Value {
        json!({
            "type": "scatter",
            "mode": "lines+markers",
            "name": name,
            "x": x,
            "y": y,
            "line": { "color": color, "width": 3 },
            "marker": { "size": 8 },
        })
    }
}

impl ChartRenderer for TrendChart {
    fn element_id(&self) -> &'static str {
        "trend-chart"
    }

    fn figure(&self, series: &HistoricalSeries) -> Figure {
        let records = series.records();
        let x = dates(records);

        let mut layout = base_layout("Backlink Growth Over Time");
        layout["hovermode"] = json!("x unified");

        Figure {
            data: vec![
                Self::line_trace(
                    "Total Backlinks",
                    &x,
                    records.iter().map(|r| r.total_backlinks).collect(),
                    COLOR_BLUE,
                ),
                Self::line_trace(
                    "Referring Domains",
                    &x,
                    records.iter().map(|r| r.referring_domains).collect(),
                    COLOR_GREEN,
                ),
            ],
            layout,
        }
    }
}

pub struct NewVsLostChart {
    window: usize,
}

impl NewVsLostChart {
    pub fn new() -> Self {
        Self {
            window: NEW_VS_LOST_WINDOW,
        }
    }

    fn bar_trace(name: &str, x: &[String], y: Vec<u64>, color: &str) -> Value {
        json!({
            "type": "bar",
            "name": name,
            "x": x,
            "y": y,
            "marker": { "color": color },
        })
    }
}

impl ChartRenderer for NewVsLostChart {
    fn element_id(&self) -> &'static str {
        "new-lost-chart"
    }

    fn figure(&self, series: &HistoricalSeries) -> Figure {
        let recent = series.tail(self.window);
        let x = dates(recent);

        let mut layout = base_layout("New vs Lost Backlinks (Last 6 Months)");
        layout["barmode"] = json!("group");

        Figure {
            data: vec![
                Self::bar_trace(
                    "New Backlinks",
                    &x,
                    recent.iter().map(|r| r.new_backlinks).collect(),
                    COLOR_GREEN,
                ),
                Self::bar_trace(
                    "Lost Backlinks",
                    &x,
                    recent.iter().map(|r| r.lost_backlinks).collect(),
                    COLOR_RED,
                ),
            ],
            layout,
        }
    }
}
