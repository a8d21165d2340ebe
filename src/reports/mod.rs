// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{ReportFormat, ReportSettings};
use crate::errors::ReportResult;
use crate::metrics::MetricsSnapshot;

pub mod html;
pub mod json;

/// Everything a generator needs to compose one report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub report_title: String,
    pub domain: String,
    pub date: String,
    pub metrics: MetricsSnapshot,
    #[serde(skip)]
    pub trend_chart: String,
    #[serde(skip)]
    pub new_lost_chart: String,
}

impl ReportView {
    pub fn new(
        settings: &ReportSettings,
        metrics: MetricsSnapshot,
        trend_chart: String,
        new_lost_chart: String,
    ) -> Self {
        Self {
            report_title: settings.report_title().to_string(),
            domain: settings.target_domain().to_string(),
            date: settings.current_date().to_string(),
            metrics,
            trend_chart,
            new_lost_chart,
        }
    }
}

pub trait ReportGenerator {
    fn generate(&self, view: &ReportView) -> ReportResult<String>;
}

pub struct ReportEngine;

impl ReportEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(&self, format: ReportFormat, view: &ReportView) -> ReportResult<String> {
        self.get_generator(format).generate(view)
    }

    fn get_generator(&self, format: ReportFormat) -> Box<dyn ReportGenerator> {
        match format {
            ReportFormat::Html => Box::new(html::HtmlGenerator::new()),
            ReportFormat::Json => Box::new(json::JsonGenerator::new()),
        }
    }
}

/// Writes the report as UTF-8, creating parent directories and replacing any existing file.
pub fn save_report<P: AsRef<Path>>(content: &str, output_path: P) -> ReportResult<PathBuf> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, content.as_bytes())?;
    info!("Report saved to {}", output_path.display());

    Ok(output_path.to_path_buf())
}
