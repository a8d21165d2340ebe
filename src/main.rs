// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use simple_logger::SimpleLogger;

use backlink_report::cli::Cli;
use backlink_report::errors::ReportError;
use backlink_report::metrics::format_percent;
use backlink_report::pipeline::{self, ReportOutcome};

fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

fn print_summary(outcome: &ReportOutcome) {
    let metrics = &outcome.metrics;
    let change = format!(
        "{} ({}%)",
        metrics.monthly_change,
        format_percent(metrics.percent_change)
    );
    let change = if metrics.monthly_change >= 0 {
        change.green()
    } else {
        change.red()
    };

    println!(
        "  {} records | {} backlinks | {} referring domains | change {} | DA {}",
        outcome.records,
        metrics.current_backlinks.to_string().bold(),
        metrics.current_domains,
        change,
        metrics.domain_authority
    );
}

fn run(cli: &Cli) -> Result<ReportOutcome> {
    let settings = cli.to_settings().context("Invalid arguments")?;
    if !cli.quiet {
        print_info("Generating report...");
    }
    if !settings.history_file().exists() {
        print_warning(&format!(
            "No historical data found at {}",
            settings.history_file().display()
        ));
    }
    let outcome = pipeline::run(&settings)?;
    Ok(outcome)
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = SimpleLogger::new().with_level(cli.level_filter()).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run(&cli) {
        Ok(outcome) => {
            print_success(&format!(
                "Report generated successfully: {}",
                outcome.path.display()
            ));
            if !cli.quiet {
                print_summary(&outcome);
            }
        }
        Err(e) => {
            if let Some(ReportError::EmptySeries) = e.downcast_ref::<ReportError>() {
                print_error("No data available to generate report");
            } else {
                print_error(&format!("{:#}", e));
            }
            std::process::exit(1);
        }
    }
}
