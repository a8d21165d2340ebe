// File: errors.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    Parse { line: u64, message: String },
    Csv(csv::Error),
    Io(std::io::Error),
    Render(String),
    EmptySeries,
    Configuration(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, message } => {
                write!(f, "Malformed history data at line {}: {}", line, message)
            }
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Render(msg) => write!(f, "Render error: {}", msg),
            Self::EmptySeries => write!(f, "No data available to generate report"),
            Self::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
            Self::Render(_) => None,
            Self::EmptySeries => None,
            Self::Configuration(_) => None,
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        Self::Csv(error)
    }
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        Self::Render(error.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
