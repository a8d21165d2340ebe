// File: history.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::io::Read;
use std::path::Path;

use crate::errors::{ReportError, ReportResult};

const UNAVAILABLE_MARKER: &str = "N/A";
const MAX_COUNT: u64 = i64::MAX as u64;

/// Authority score reported by the monitoring provider for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainAuthority {
    Score(f64),
    Unavailable,
}

impl DomainAuthority {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(UNAVAILABLE_MARKER)
            || trimmed.eq_ignore_ascii_case("nan")
        {
            return Ok(Self::Unavailable);
        }

        trimmed
            .parse::<f64>()
            .map(Self::Score)
            .map_err(|_| format!("invalid domain_authority '{}'", trimmed))
    }
}

impl fmt::Display for DomainAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(score) if score.fract() == 0.0 => write!(f, "{}", *score as i64),
            Self::Score(score) => write!(f, "{}", score),
            Self::Unavailable => write!(f, "{}", UNAVAILABLE_MARKER),
        }
    }
}

impl Serialize for DomainAuthority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(score) => serializer.serialize_f64(*score),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE_MARKER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub total_backlinks: u64,
    pub referring_domains: u64,
    pub new_backlinks: u64,
    pub lost_backlinks: u64,
    pub domain_authority: DomainAuthority,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    total_backlinks: u64,
    referring_domains: u64,
    new_backlinks: u64,
    lost_backlinks: u64,
    #[serde(default)]
    domain_authority: String,
}

impl RawRecord {
    fn into_record(self) -> Result<HistoricalRecord, String> {
        for (column, value) in [
            ("total_backlinks", self.total_backlinks),
            ("referring_domains", self.referring_domains),
            ("new_backlinks", self.new_backlinks),
            ("lost_backlinks", self.lost_backlinks),
        ] {
            if value > MAX_COUNT {
                return Err(format!("{} {} is out of range", column, value));
            }
        }

        Ok(HistoricalRecord {
            date: parse_date(&self.date)?,
            total_backlinks: self.total_backlinks,
            referring_domains: self.referring_domains,
            new_backlinks: self.new_backlinks,
            lost_backlinks: self.lost_backlinks,
            domain_authority: DomainAuthority::parse(&self.domain_authority)?,
        })
    }
}

/// Accepts plain dates as well as full timestamps, keeping only the date part.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    Err(format!("invalid date '{}'", trimmed))
}

/// Date-ordered history as stored on disk. Never re-sorted after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricalSeries {
    records: Vec<HistoricalRecord>,
}

impl HistoricalSeries {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&HistoricalRecord> {
        self.records.last()
    }

    /// Second-to-last record, the period `last()` is compared against.
    pub fn previous(&self) -> Option<&HistoricalRecord> {
        self.records.len().checked_sub(2).map(|i| &self.records[i])
    }

    pub fn tail(&self, count: usize) -> &[HistoricalRecord] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }

    pub fn is_chronological(&self) -> bool {
        self.records.windows(2).all(|pair| pair[0].date <= pair[1].date)
    }
}

impl FromIterator<HistoricalRecord> for HistoricalSeries {
    fn from_iter<I: IntoIterator<Item = HistoricalRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Loads the history file. A missing file yields an empty series.
pub fn load_history<P: AsRef<Path>>(path: P) -> ReportResult<HistoricalSeries> {
    let path = path.as_ref();

    if !path.exists() {
        warn!("No historical data found at {}", path.display());
        return Ok(HistoricalSeries::empty());
    }

    let file = std::fs::File::open(path)?;
    let series = read_history(file)?;
    debug!("Loaded {} records from {}", series.len(), path.display());
    Ok(series)
}

pub fn read_history<R: Read>(reader: R) -> ReportResult<HistoricalSeries> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| ReportError::Parse {
                line,
                message: e.to_string(),
            })?;

        let record = raw
            .into_record()
            .map_err(|message| ReportError::Parse { line, message })?;
        records.push(record);
    }

    let series = HistoricalSeries::new(records);
    if !series.is_chronological() {
        warn!("History is not in ascending date order; latest-period metrics use row position");
    }

    Ok(series)
}
