// File: pipeline.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::{debug, info};
use std::path::PathBuf;

use crate::charts::{ChartRenderer, NewVsLostChart, TrendChart};
use crate::config::ReportSettings;
use crate::errors::{ReportError, ReportResult};
use crate::history::{load_history, HistoricalSeries};
use crate::metrics::{calculate_metrics, MetricsSnapshot};
use crate::reports::{save_report, ReportEngine, ReportView};

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub path: PathBuf,
    pub metrics: MetricsSnapshot,
    pub records: usize,
}

#[derive(Debug, Clone)]
pub struct ComposedReport {
    pub metrics: MetricsSnapshot,
    pub content: String,
}

/// Builds the report document for an already loaded series without touching disk.
pub fn compose_report(
    settings: &ReportSettings,
    series: &HistoricalSeries,
) -> ReportResult<ComposedReport> {
    if series.is_empty() {
        return Err(ReportError::EmptySeries);
    }

    let metrics = calculate_metrics(series);
    debug!("Calculated metrics: {:?}", metrics);

    let trend_chart = TrendChart::new().render(series)?;
    let new_lost_chart = NewVsLostChart::new().render(series)?;

    let view = ReportView::new(settings, metrics.clone(), trend_chart, new_lost_chart);
    let content = ReportEngine::new().generate_report(settings.format(), &view)?;

    Ok(ComposedReport { metrics, content })
}

/// Load, compute, render and write one report.
pub fn run(settings: &ReportSettings) -> ReportResult<ReportOutcome> {
    info!("Generating report from {}", settings.history_file().display());

    let series = load_history(settings.history_file())?;
    if series.is_empty() {
        return Err(ReportError::EmptySeries);
    }

    let report = compose_report(settings, &series)?;
    let path = save_report(&report.content, settings.report_filename())?;

    Ok(ReportOutcome {
        path,
        metrics: report.metrics,
        records: series.len(),
    })
}
