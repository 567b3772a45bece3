//! Result aggregation.

use chrono::Utc;

use crate::models::{AggregateReport, ProbeOutcome, ProbeResult};

/// Partitions probe results into ordered buckets and computes summary counts.
///
/// Pure and deterministic: input order is preserved within each bucket, and
/// the bucket lengths always sum to `platforms_probed == results.len()`.
pub fn aggregate(username: &str, results: Vec<ProbeResult>) -> AggregateReport {
    let platforms_probed = results.len();

    let mut found = Vec::new();
    let mut not_found = Vec::new();
    let mut errors = Vec::new();
    let mut rate_limited = Vec::new();
    let mut unsupported = Vec::new();

    for result in results {
        match result.outcome {
            ProbeOutcome::Found => found.push(result),
            ProbeOutcome::NotFound => not_found.push(result),
            ProbeOutcome::Error => errors.push(result),
            ProbeOutcome::RateLimited => rate_limited.push(result),
            ProbeOutcome::Unsupported => unsupported.push(result),
        }
    }

    AggregateReport {
        username: username.to_string(),
        generated_at: Utc::now(),
        platforms_probed,
        found,
        not_found,
        errors,
        rate_limited,
        unsupported,
    }
}
