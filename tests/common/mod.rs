// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str =
    "date,total_backlinks,referring_domains,new_backlinks,lost_backlinks,domain_authority";

pub fn two_month_history() -> String {
    format!(
        "{}\n2025-01-01,100,10,5,2,20\n2025-02-01,120,12,25,5,22\n",
        HEADER
    )
}

pub fn year_history() -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for month in 1..=12u32 {
        let total = 1000 + month * 50;
        csv.push_str(&format!(
            "2024-{:02}-01,{},{},{},{},{}\n",
            month,
            total,
            100 + month,
            60 + month,
            10,
            if month == 12 { "N/A".to_string() } else { "35".to_string() }
        ));
    }
    csv
}

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("data").join("backlink_history.csv")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.dir.path().join("reports")
    }

    pub fn write_history(&self, contents: &str) -> PathBuf {
        let path = self.history_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }
}
