//! Command-line options and tunable constants.

use clap::{Parser, ValueEnum};

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default pause between successive platform probes in milliseconds.
///
/// Probing dozens of platforms back to back from one IP looks like abuse.
/// The pause keeps request spacing polite; it applies between probeable
/// platforms only, never around unsupported entries.
pub const DEFAULT_PACING_MS: u64 = 500;

/// Default User-Agent string for HTTP requests.
///
/// Uses a generic Chrome-like string without a specific version number to avoid
/// becoming outdated. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options except the username have defaults.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// username_status somebody
///
/// # Faster probing against a private test registry mirror
/// username_status somebody --pacing-ms 100 --timeout-seconds 5
///
/// # Machine-readable report on stdout
/// username_status somebody --json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "username_status",
    about = "Checks a username across social platforms and reports where a public profile appears to exist."
)]
pub struct Config {
    /// Username to look up
    #[arg(value_parser)]
    pub username: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pause between successive platform probes in milliseconds
    ///
    /// Lowering this speeds up a run but raises the chance of tripping
    /// abuse protections on the probed platforms.
    #[arg(long, default_value_t = DEFAULT_PACING_MS)]
    pub pacing_ms: u64,

    /// HTTP User-Agent header value.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the full report as JSON on stdout instead of the summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            username: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            pacing_ms: DEFAULT_PACING_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            json: false,
        }
    }
}
