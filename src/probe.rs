//! HTTP probe executor.
//!
//! Issues one GET per probeable platform, classifies the response, and paces
//! requests so successive probes never hammer the targets. Transport failures
//! are recovered into [`ProbeOutcome::Error`] and the run continues; the only
//! fatal conditions are an empty username and client setup failure.

use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;

use crate::config::Config;
use crate::error_handling::{
    update_error_stats, ErrorStats, ErrorType, InitializationError, LookupError,
};
use crate::initialization::init_client;
use crate::matcher::matcher_for;
use crate::models::{ProbeOutcome, ProbeResult};
use crate::registry::{build_profile_url, PlatformDescriptor, ProbeMethod};

/// Executes username probes against platform descriptors.
///
/// Holds the single long-lived HTTP client shared by every probe in a run.
/// Execution is strictly sequential, so no locking is needed.
pub struct ProbeExecutor {
    client: reqwest::Client,
    pacing: Duration,
    error_stats: ErrorStats,
}

impl ProbeExecutor {
    /// Builds an executor with a client configured from `config`
    /// (timeout, User-Agent, redirect following).
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(ProbeExecutor {
            client,
            pacing: Duration::from_millis(config.pacing_ms),
            error_stats: ErrorStats::new(),
        })
    }

    /// Per-run counters of recovered request failures.
    pub fn error_stats(&self) -> &ErrorStats {
        &self.error_stats
    }

    /// Probes a single platform for `username`.
    ///
    /// Unsupported descriptors resolve immediately without any network call.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidUsername` if `username` is empty.
    pub async fn probe(
        &self,
        username: &str,
        descriptor: &PlatformDescriptor,
    ) -> Result<ProbeResult, LookupError> {
        if username.is_empty() {
            return Err(LookupError::InvalidUsername);
        }
        Ok(self.probe_platform(username, descriptor).await)
    }

    /// Probes every descriptor in order, pacing between probeable platforms.
    ///
    /// The pacing sleep runs before every probeable request except the first,
    /// so a registry with `n` probeable platforms sleeps `n - 1` times.
    /// Unsupported descriptors neither probe nor pace.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidUsername` if `username` is empty. No
    /// per-platform failure aborts the run.
    pub async fn probe_registry(
        &self,
        username: &str,
        descriptors: &[PlatformDescriptor],
    ) -> Result<Vec<ProbeResult>, LookupError> {
        if username.is_empty() {
            return Err(LookupError::InvalidUsername);
        }

        let mut results = Vec::with_capacity(descriptors.len());
        let mut any_probed = false;

        for descriptor in descriptors {
            if descriptor.is_probeable() {
                if any_probed {
                    tokio::time::sleep(self.pacing).await;
                }
                any_probed = true;
            }

            let result = self.probe_platform(username, descriptor).await;
            debug!("{}: {}", result.platform, result.outcome.as_str());
            results.push(result);
        }

        Ok(results)
    }

    async fn probe_platform(&self, username: &str, descriptor: &PlatformDescriptor) -> ProbeResult {
        match &descriptor.probe {
            ProbeMethod::Unsupported(reason) => {
                debug!("{}: skipped ({})", descriptor.name, reason);
                ProbeResult {
                    platform: descriptor.name.clone(),
                    url: None,
                    outcome: ProbeOutcome::Unsupported,
                }
            }
            ProbeMethod::UrlTemplate(template) => {
                let url = match build_profile_url(template, username) {
                    Ok(url) => url,
                    Err(e) => {
                        warn!(
                            "{}: username does not form a valid profile URL: {e}",
                            descriptor.name
                        );
                        self.error_stats.increment(ErrorType::InvalidProfileUrl);
                        return ProbeResult {
                            platform: descriptor.name.clone(),
                            url: None,
                            outcome: ProbeOutcome::Error,
                        };
                    }
                };

                let outcome = self.classify_response(&descriptor.name, &url).await;
                ProbeResult {
                    platform: descriptor.name.clone(),
                    url: Some(url),
                    outcome,
                }
            }
        }
    }

    /// Issues the GET and applies the classification precedence:
    /// transport error, then HTTP 429, then the platform's matcher.
    async fn classify_response(&self, platform: &str, url: &str) -> ProbeOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("{platform}: request failed: {e}");
                update_error_stats(&self.error_stats, &e);
                return ProbeOutcome::Error;
            }
        };

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("{platform}: rate limited (HTTP 429)");
            self.error_stats
                .increment(ErrorType::HttpRequestTooManyRequests);
            return ProbeOutcome::RateLimited;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!("{platform}: failed to read response body: {e}");
                update_error_stats(&self.error_stats, &e);
                return ProbeOutcome::Error;
            }
        };

        matcher_for(platform).classify(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_config() -> Config {
        Config {
            pacing_ms: 0,
            timeout_seconds: 2,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_empty_username_is_rejected() {
        let executor = ProbeExecutor::new(&quiet_config()).unwrap();
        let descriptor = PlatformDescriptor::probeable("github", "https://github.com/{}");

        let err = executor.probe("", &descriptor).await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidUsername));

        let err = executor
            .probe_registry("", &[descriptor])
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::InvalidUsername));
    }

    #[tokio::test]
    async fn test_unsupported_descriptor_resolves_without_network() {
        let executor = ProbeExecutor::new(&quiet_config()).unwrap();
        let descriptor =
            PlatformDescriptor::unsupported("discord", "Discord usernames not publicly searchable");

        let result = executor.probe("somebody", &descriptor).await.unwrap();
        assert_eq!(result.outcome, ProbeOutcome::Unsupported);
        assert_eq!(result.url, None);
        assert_eq!(result.platform, "discord");
    }

    #[tokio::test]
    async fn test_malformed_profile_url_resolves_to_error() {
        let executor = ProbeExecutor::new(&quiet_config()).unwrap();
        // Subdomain template: a username with a space cannot form a valid host
        let descriptor = PlatformDescriptor::probeable("tumblr", "https://{}.tumblr.com");

        let result = executor.probe("bad name", &descriptor).await.unwrap();
        assert_eq!(result.outcome, ProbeOutcome::Error);
        assert_eq!(result.url, None);
        assert_eq!(
            executor.error_stats().get_count(ErrorType::InvalidProfileUrl),
            1
        );
    }
}
