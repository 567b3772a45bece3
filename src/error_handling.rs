//! Error taxonomy and per-run error statistics.
//!
//! Two kinds of failure exist in a lookup: fatal ones (bad input, setup
//! failures) surfaced as typed errors, and per-probe transport failures that
//! are recovered locally into [`crate::models::ProbeOutcome::Error`] and only
//! counted here for end-of-run reporting.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal errors for a lookup call.
///
/// Per-probe network failures never appear here; they resolve to
/// `ProbeOutcome::Error` and the run continues.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The username was empty.
    #[error("username must not be empty")]
    InvalidUsername,
}

/// Categories of recovered per-probe failures, tracked for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestRedirectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    InvalidProfileUrl,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::InvalidProfileUrl => "Invalid profile URL",
        }
    }
}

/// Thread-safe error statistics tracker.
///
/// Tracks the count of each error type using atomic counters. All error types
/// are initialized to zero on creation, so lookups never miss.
pub struct ErrorStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ErrorStats {
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    pub fn increment(&self, error: ErrorType) {
        // All ErrorType variants are initialized in new(), so unwrap() is safe
        self.errors
            .get(&error)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_count(&self, error: ErrorType) -> usize {
        // All ErrorType variants are initialized in new(), so unwrap() is safe
        self.errors.get(&error).unwrap().load(Ordering::SeqCst)
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Updates error statistics based on a `reqwest::Error`.
///
/// Analyzes the error and increments the appropriate `ErrorType` counter.
pub fn update_error_stats(error_stats: &ErrorStats, error: &reqwest::Error) {
    let error_type = if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    };

    error_stats.increment(error_type);
}

/// Logs the nonzero error counters at the end of a run.
pub fn log_error_statistics(error_stats: &ErrorStats) {
    let mut any = false;
    for error_type in ErrorType::iter() {
        let count = error_stats.get_count(error_type);
        if count > 0 {
            log::info!("{}: {}", error_type.as_str(), count);
            any = true;
        }
    }
    if !any {
        log::debug!("No request errors recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_stats_initialization() {
        let stats = ErrorStats::new();
        // All error types should be initialized to 0
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_count(error_type), 0);
        }
    }

    #[test]
    fn test_error_stats_increment() {
        let stats = ErrorStats::new();
        stats.increment(ErrorType::HttpRequestTimeoutError);
        assert_eq!(stats.get_count(ErrorType::HttpRequestTimeoutError), 1);
        assert_eq!(stats.get_count(ErrorType::HttpRequestConnectError), 0);
    }

    #[test]
    fn test_error_stats_multiple_increments() {
        let stats = ErrorStats::new();
        stats.increment(ErrorType::HttpRequestTooManyRequests);
        stats.increment(ErrorType::HttpRequestTooManyRequests);
        stats.increment(ErrorType::HttpRequestTooManyRequests);
        assert_eq!(stats.get_count(ErrorType::HttpRequestTooManyRequests), 3);
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::InvalidUsername;
        assert_eq!(err.to_string(), "username must not be empty");
    }
}
