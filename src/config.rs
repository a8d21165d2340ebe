// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023
// - Volker Schwaberow <volker@schwaberow.de>

use chrono::Local;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::ReportError;

pub const DEFAULT_REPORT_TITLE: &str = "Backlink Monitoring Report";
pub const DEFAULT_TARGET_DOMAIN: &str = "example.com";
pub const DEFAULT_HISTORY_FILE: &str = "data/backlink_history.csv";
pub const DEFAULT_REPORTS_DIR: &str = "reports";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::Configuration(format!(
                "Unsupported report format: {}",
                s
            ))),
        }
    }
}

/// Presentation and path settings for one report run.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    report_title: String,
    target_domain: String,
    current_date: String,
    history_file: PathBuf,
    reports_dir: PathBuf,
    report_filename: Option<PathBuf>,
    format: ReportFormat,
}

impl ReportSettings {
    pub fn new() -> Self {
        Self {
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            target_domain: DEFAULT_TARGET_DOMAIN.to_string(),
            current_date: Local::now().format("%Y-%m-%d").to_string(),
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            report_filename: None,
            format: ReportFormat::Html,
        }
    }

    pub fn set_report_title(&mut self, report_title: impl Into<String>) {
        self.report_title = report_title.into();
    }

    pub fn report_title(&self) -> &str {
        &self.report_title
    }

    pub fn set_target_domain(&mut self, target_domain: impl Into<String>) {
        self.target_domain = target_domain.into();
    }

    pub fn target_domain(&self) -> &str {
        &self.target_domain
    }

    pub fn set_current_date(&mut self, current_date: impl Into<String>) {
        self.current_date = current_date.into();
    }

    pub fn current_date(&self) -> &str {
        &self.current_date
    }

    pub fn set_history_file(&mut self, history_file: impl Into<PathBuf>) {
        self.history_file = history_file.into();
    }

    pub fn history_file(&self) -> &Path {
        &self.history_file
    }

    pub fn set_reports_dir(&mut self, reports_dir: impl Into<PathBuf>) {
        self.reports_dir = reports_dir.into();
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub fn set_report_filename(&mut self, report_filename: impl Into<PathBuf>) {
        self.report_filename = Some(report_filename.into());
    }

    /// Explicit output path, or `<reports_dir>/backlink_report_<date>.<ext>`.
    pub fn report_filename(&self) -> PathBuf {
        match &self.report_filename {
            Some(path) => path.clone(),
            None => self.reports_dir.join(format!(
                "backlink_report_{}.{}",
                self.current_date,
                self.format.extension()
            )),
        }
    }

    pub fn set_format(&mut self, format: ReportFormat) {
        self.format = format;
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self::new()
    }
}
