// File: json.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use super::{ReportGenerator, ReportView};
use crate::errors::{ReportError, ReportResult};

pub struct JsonGenerator;

impl JsonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonGenerator {
    fn generate(&self, view: &ReportView) -> ReportResult<String> {
        serde_json::to_string_pretty(view)
            .map_err(|e| ReportError::Render(format!("Failed to serialize report to JSON: {}", e)))
    }
}
