//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `username_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use username_status::initialization::init_logger_with;
use username_status::{run_lookup, Config, UsernameReport};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let as_json = config.json;

    match run_lookup(config).await {
        Ok(report) => {
            if as_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report")?
                );
            } else {
                print_report(&report);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("username_status error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Prints a human-readable summary of the lookup report.
fn print_report(report: &UsernameReport) {
    let availability = &report.availability;
    let patterns = &report.patterns;

    println!();
    println!("Username report for {}", report.username.bold());
    println!(
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    println!(
        "Platforms checked: {}  ({} found, {} not found, {} errors, {} rate limited, {} unsupported)",
        availability.platforms_probed,
        availability.found.len().to_string().green(),
        availability.not_found.len(),
        availability.errors.len().to_string().red(),
        availability.rate_limited.len().to_string().yellow(),
        availability.unsupported.len()
    );

    if !availability.found.is_empty() {
        println!();
        println!("{}", "Profiles found:".green().bold());
        for result in &availability.found {
            let url = result.url.as_deref().unwrap_or("-");
            println!("  {} {}", result.platform.green(), url);
        }
    }

    if !availability.rate_limited.is_empty() {
        println!();
        println!("{}", "Rate limited (retry later):".yellow());
        for result in &availability.rate_limited {
            println!("  {}", result.platform);
        }
    }

    println!();
    println!("{}", "Pattern analysis:".bold());
    println!("  Length: {} characters", patterns.length);
    println!("  Has digits: {}", patterns.has_digits);
    println!("  Has special chars: {}", patterns.has_special_chars);
    println!(
        "  Security score: {}/10",
        patterns.security.security_score.to_string().bold()
    );
    for issue in &patterns.security.issues {
        println!("  {} {}", "!".yellow(), issue);
    }
    println!("  {}", patterns.security.recommendation);

    if !patterns.variations.is_empty() {
        println!();
        println!("Common variations: {}", patterns.variations.join(", "));
    }
}
