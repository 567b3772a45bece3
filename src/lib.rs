//! username_status library: username probing and analysis
//!
//! This library checks a username against a fixed registry of third-party
//! platforms to infer whether a public profile exists, then analyzes the
//! username string itself for patterns, common variations, and heuristic
//! security issues. Results are purely heuristic: a `found` outcome means the
//! platform's response looked like a profile page, nothing more.
//!
//! # Example
//!
//! ```no_run
//! use username_status::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     username: "somebody".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! println!(
//!     "Probed {} platforms: {} profiles found",
//!     report.availability.platforms_probed,
//!     report.availability.found.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod aggregate;
pub mod config;
#[allow(missing_docs)]
pub mod error_handling;
pub mod initialization;
pub mod matcher;
pub mod models;
pub mod patterns;
pub mod probe;
pub mod registry;
pub mod security;
pub mod variations;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use models::{
    AggregateReport, ProbeOutcome, ProbeResult, SecurityAssessment, UsernamePatternAnalysis,
    UsernameReport,
};
pub use probe::ProbeExecutor;
pub use registry::{build_profile_url, platforms, PlatformDescriptor, ProbeMethod};
pub use run::run_lookup;

// Internal run module (contains the main lookup orchestration)
mod run {
    use anyhow::{Context, Result};
    use chrono::Utc;
    use log::info;

    use crate::config::Config;
    use crate::error_handling::{log_error_statistics, LookupError};
    use crate::models::UsernameReport;
    use crate::probe::ProbeExecutor;
    use crate::{aggregate, patterns, registry};

    /// Runs a full username lookup with the provided configuration.
    ///
    /// This is the main entry point for the library. It probes every platform
    /// in the registry sequentially, aggregates the outcomes, analyzes the
    /// username string, and merges everything into one report.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The username is empty
    /// - The HTTP client cannot be initialized
    ///
    /// Per-platform network failures never abort the run; they appear in the
    /// report's `errors` bucket instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use username_status::{run_lookup, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     username: "somebody".to_string(),
    ///     ..Default::default()
    /// };
    /// let report = run_lookup(config).await?;
    /// println!("{} profiles found", report.availability.found.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_lookup(config: Config) -> Result<UsernameReport> {
        if config.username.is_empty() {
            return Err(LookupError::InvalidUsername.into());
        }
        let username = config.username.clone();

        let executor =
            ProbeExecutor::new(&config).context("Failed to initialize HTTP client")?;

        let descriptors = registry::platforms();
        let probeable = descriptors.iter().filter(|d| d.is_probeable()).count();
        info!(
            "Checking username '{}' across {} platforms ({} probeable)",
            username,
            descriptors.len(),
            probeable
        );

        let start_time = std::time::Instant::now();
        let results = executor.probe_registry(&username, descriptors).await?;
        let elapsed = start_time.elapsed().as_secs_f64();

        log_error_statistics(executor.error_stats());

        let availability = aggregate::aggregate(&username, results);
        let pattern_analysis = patterns::analyze(&username);

        info!(
            "Lookup finished in {:.1}s: {} found, {} not found, {} errors, {} rate limited, {} unsupported",
            elapsed,
            availability.found.len(),
            availability.not_found.len(),
            availability.errors.len(),
            availability.rate_limited.len(),
            availability.unsupported.len()
        );

        Ok(UsernameReport {
            username,
            generated_at: Utc::now(),
            availability,
            patterns: pattern_analysis,
        })
    }
}
