// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{ReportFormat, ReportSettings};
use crate::errors::{ReportError, ReportResult};

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(
        short = 'i',
        long = "history-file",
        help = "CSV file with the backlink history"
    )]
    pub history_file: Option<PathBuf>,

    #[arg(short = 'd', long = "reports-dir", help = "Directory for generated reports")]
    pub reports_dir: Option<PathBuf>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Explicit report path (overrides --reports-dir naming)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "domain", help = "Monitored domain shown in the report header")]
    pub domain: Option<String>,

    #[arg(long = "date", help = "Generation date label (defaults to today)")]
    pub date: Option<String>,

    #[arg(short = 'f', long = "format", default_value = "html")]
    pub format: String,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short = 'q', long = "quiet", help = "Reduce output verbosity")]
    pub quiet: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            return LevelFilter::Debug;
        }
        if self.quiet {
            return LevelFilter::Error;
        }
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }

    pub fn to_settings(&self) -> ReportResult<ReportSettings> {
        let mut settings = ReportSettings::new();

        if let Some(ref path) = self.history_file {
            settings.set_history_file(path);
        }
        if let Some(ref dir) = self.reports_dir {
            settings.set_reports_dir(dir);
        }
        if let Some(ref title) = self.title {
            settings.set_report_title(title.as_str());
        }
        if let Some(ref domain) = self.domain {
            settings.set_target_domain(domain.as_str());
        }
        if let Some(ref date) = self.date {
            if date.trim().is_empty() {
                return Err(ReportError::Configuration(
                    "--date must not be empty".to_string(),
                ));
            }
            settings.set_current_date(date.as_str());
        }
        settings.set_format(self.format.parse()?);
        if let Some(ref output) = self.output {
            settings.set_report_filename(output);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["backlink-report"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_map_to_default_settings() {
        let settings = parse(&[]).to_settings().unwrap();
        assert_eq!(settings.format(), ReportFormat::Html);
        assert_eq!(settings.history_file(), PathBuf::from("data/backlink_history.csv"));
        assert_eq!(settings.report_title(), "Backlink Monitoring Report");
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = parse(&[
            "--history-file",
            "h.csv",
            "--reports-dir",
            "out",
            "--title",
            "Monthly",
            "--domain",
            "shop.example",
            "--date",
            "2025-03-01",
            "--format",
            "json",
        ]);
        let settings = cli.to_settings().unwrap();

        assert_eq!(settings.history_file(), PathBuf::from("h.csv"));
        assert_eq!(settings.report_title(), "Monthly");
        assert_eq!(settings.target_domain(), "shop.example");
        assert_eq!(
            settings.report_filename(),
            PathBuf::from("out").join("backlink_report_2025-03-01.json")
        );
    }

    #[test]
    fn test_output_overrides_naming() {
        let settings = parse(&["--output", "x/report.html"]).to_settings().unwrap();
        assert_eq!(settings.report_filename(), PathBuf::from("x/report.html"));
    }

    #[test]
    fn test_unknown_format_is_configuration_error() {
        let result = parse(&["--format", "pdf"]).to_settings();
        assert!(matches!(result, Err(ReportError::Configuration(_))));
    }

    #[rstest]
    #[case(&["-v"], LevelFilter::Debug)]
    #[case(&["-q"], LevelFilter::Error)]
    #[case(&["--log-level", "info"], LevelFilter::Info)]
    #[case(&["--log-level", "bogus"], LevelFilter::Warn)]
    #[case(&[], LevelFilter::Warn)]
    fn test_level_filter(#[case] args: &[&str], #[case] expected: LevelFilter) {
        assert_eq!(parse(args).level_filter(), expected);
    }
}
