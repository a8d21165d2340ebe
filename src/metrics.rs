// File: metrics.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use serde::Serialize;

use crate::history::{DomainAuthority, HistoricalSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

impl Trend {
    /// A flat month counts as an increase.
    pub fn from_change(change: i64) -> Self {
        if change >= 0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Increase => "positive",
            Self::Decrease => "negative",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Increase => "▲",
            Self::Decrease => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub current_backlinks: u64,
    pub current_domains: u64,
    pub monthly_change: i64,
    pub percent_change: f64,
    pub new_this_month: u64,
    pub lost_this_month: u64,
    pub domain_authority: DomainAuthority,
}

impl MetricsSnapshot {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.monthly_change)
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            current_backlinks: 0,
            current_domains: 0,
            monthly_change: 0,
            percent_change: 0.0,
            new_this_month: 0,
            lost_this_month: 0,
            domain_authority: DomainAuthority::Unavailable,
        }
    }
}

/// Only the last two records of the series participate.
pub fn calculate_metrics(series: &HistoricalSeries) -> MetricsSnapshot {
    let Some(current) = series.last() else {
        return MetricsSnapshot::default();
    };

    let (monthly_change, percent_change) = match series.previous() {
        Some(previous) => {
            let change = signed_delta(current.total_backlinks, previous.total_backlinks);
            (change, percent_of(change, previous.total_backlinks))
        }
        None => (0, 0.0),
    };

    MetricsSnapshot {
        current_backlinks: current.total_backlinks,
        current_domains: current.referring_domains,
        monthly_change,
        percent_change,
        new_this_month: current.new_backlinks,
        lost_this_month: current.lost_backlinks,
        domain_authority: current.domain_authority,
    }
}

/// Saturates at the `i64` bounds instead of wrapping.
fn signed_delta(current: u64, previous: u64) -> i64 {
    let delta = i128::from(current) - i128::from(previous);
    i64::try_from(delta).unwrap_or(if delta > 0 { i64::MAX } else { i64::MIN })
}

fn percent_of(change: i64, base: u64) -> f64 {
    if base == 0 {
        return 0.0;
    }
    round_to_hundredths(change as f64 / base as f64 * 100.0)
}

/// Ties go to the even digit: 3.125 becomes 3.12.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn format_percent(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
