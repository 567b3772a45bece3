//! Report data model.
//!
//! All types here are built once per lookup and are immutable afterwards.
//! They serialize to JSON so a caller can persist or display reports without
//! the core dictating a file format.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Terminal classification of a single platform probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The platform returned a response consistent with an existing profile.
    Found,
    /// The platform returned a response consistent with no profile.
    NotFound,
    /// The platform answered HTTP 429.
    RateLimited,
    /// The request failed at the transport level (timeout, refused, etc.).
    Error,
    /// The platform has no public username lookup; no request was made.
    Unsupported,
}

impl ProbeOutcome {
    /// Short human-readable label used in log lines and the CLI summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeOutcome::Found => "found",
            ProbeOutcome::NotFound => "not found",
            ProbeOutcome::RateLimited => "rate limited",
            ProbeOutcome::Error => "error",
            ProbeOutcome::Unsupported => "unsupported",
        }
    }
}

/// Result of probing one platform for one username.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    /// Platform name as it appears in the registry.
    pub platform: String,
    /// Profile URL that was probed. `None` for unsupported platforms and for
    /// templates that produced an unparseable URL.
    pub url: Option<String>,
    /// Terminal classification for this probe.
    pub outcome: ProbeOutcome,
}

/// Probe results partitioned into ordered buckets.
///
/// Invariant: the five bucket lengths sum to `platforms_probed`, which equals
/// the number of results fed into [`crate::aggregate::aggregate`].
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// The username that was probed.
    pub username: String,
    /// When the aggregation was performed.
    pub generated_at: DateTime<Utc>,
    /// Total number of registry entries covered by this report.
    pub platforms_probed: usize,
    /// Platforms where a profile appears to exist, in registry order.
    pub found: Vec<ProbeResult>,
    /// Platforms where no profile was detected, in registry order.
    pub not_found: Vec<ProbeResult>,
    /// Platforms whose probe failed at the transport level, in registry order.
    pub errors: Vec<ProbeResult>,
    /// Platforms that answered HTTP 429, in registry order.
    pub rate_limited: Vec<ProbeResult>,
    /// Platforms with no public lookup, in registry order.
    pub unsupported: Vec<ProbeResult>,
}

/// Heuristic security assessment of a username string.
///
/// The score is a 0-10 predictability rating, not a cryptographic measure.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityAssessment {
    /// Heuristic score, 10 (best) down to 0.
    pub security_score: u8,
    /// Human-readable descriptions of each triggered penalty.
    pub issues: Vec<String>,
    /// One-line recommendation derived from `issues`.
    pub recommendation: String,
}

/// Pattern analysis of the username string, independent of any network probe.
#[derive(Debug, Clone, Serialize)]
pub struct UsernamePatternAnalysis {
    /// Length in characters.
    pub length: usize,
    /// Whether the username contains any digit.
    pub has_digits: bool,
    /// Whether the username contains any non-alphanumeric character.
    pub has_special_chars: bool,
    /// Whether the username has cased characters and none are uppercase.
    pub is_lowercase: bool,
    /// Whether the username has cased characters and none are lowercase.
    pub is_uppercase: bool,
    /// Deterministic, deduplicated candidate variations (at most 10).
    pub variations: Vec<String>,
    /// Heuristic security assessment.
    pub security: SecurityAssessment,
}

/// Complete lookup report: availability probing plus pattern analysis.
#[derive(Debug, Clone, Serialize)]
pub struct UsernameReport {
    /// The username that was looked up.
    pub username: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// Per-platform probe results, bucketed.
    pub availability: AggregateReport,
    /// String-level pattern and security analysis.
    pub patterns: UsernamePatternAnalysis,
}
