//! Response classification strategies.
//!
//! Most platforms can be classified by status code alone: 200 means a profile
//! page was served. A handful serve HTTP 200 for missing profiles and embed a
//! "not found" phrase in the body instead (or, for Telegram, only embed a
//! characteristic phrase when the profile exists). Those get an explicit
//! override keyed by platform name; everything else uses the generic matcher.
//!
//! Matchers only see responses that already passed the executor's earlier
//! precedence rules: transport errors and HTTP 429 never reach a matcher.

use reqwest::StatusCode;

use crate::models::ProbeOutcome;

/// Classifies an HTTP response into a probe outcome.
pub trait OutcomeMatcher: Send + Sync {
    /// Classify a non-429 response from its status and body.
    fn classify(&self, status: StatusCode, body: &str) -> ProbeOutcome;
}

/// Generic rule: HTTP 200 means found, anything else means not found.
pub struct StatusOnlyMatcher;

impl OutcomeMatcher for StatusOnlyMatcher {
    fn classify(&self, status: StatusCode, _body: &str) -> ProbeOutcome {
        if status == StatusCode::OK {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::NotFound
        }
    }
}

/// Found only when a 200 body does NOT contain the given phrase.
///
/// Used for platforms that serve a soft-404 profile page with HTTP 200.
pub struct AbsencePhraseMatcher {
    phrase: &'static str,
    case_insensitive: bool,
}

impl OutcomeMatcher for AbsencePhraseMatcher {
    fn classify(&self, status: StatusCode, body: &str) -> ProbeOutcome {
        if status != StatusCode::OK {
            return ProbeOutcome::NotFound;
        }
        let absent = if self.case_insensitive {
            !body.to_lowercase().contains(self.phrase)
        } else {
            !body.contains(self.phrase)
        };
        if absent {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::NotFound
        }
    }
}

/// Found only when a 200 body DOES contain the given phrase.
///
/// Telegram serves a generic landing page for unknown usernames; only real
/// profile pages carry the phrase.
pub struct PresencePhraseMatcher {
    phrase: &'static str,
}

impl OutcomeMatcher for PresencePhraseMatcher {
    fn classify(&self, status: StatusCode, body: &str) -> ProbeOutcome {
        if status == StatusCode::OK && body.contains(self.phrase) {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::NotFound
        }
    }
}

/// Returns the matcher for a platform: an override if one exists, otherwise
/// the generic status-only matcher.
pub fn matcher_for(platform: &str) -> &'static dyn OutcomeMatcher {
    static GENERIC: StatusOnlyMatcher = StatusOnlyMatcher;
    static GITHUB: AbsencePhraseMatcher = AbsencePhraseMatcher {
        phrase: "Not Found",
        case_insensitive: false,
    };
    static TWITTER: AbsencePhraseMatcher = AbsencePhraseMatcher {
        phrase: "This account doesn't exist",
        case_insensitive: false,
    };
    static INSTAGRAM: AbsencePhraseMatcher = AbsencePhraseMatcher {
        phrase: "Sorry, this page isn't available",
        case_insensitive: false,
    };
    // Reddit's error page casing has varied over time; match case-insensitively
    static REDDIT: AbsencePhraseMatcher = AbsencePhraseMatcher {
        phrase: "page not found",
        case_insensitive: true,
    };
    static TELEGRAM: PresencePhraseMatcher = PresencePhraseMatcher {
        phrase: "If you have <strong>Telegram</strong>",
    };

    match platform {
        "github" => &GITHUB,
        "twitter" => &TWITTER,
        "instagram" => &INSTAGRAM,
        "reddit" => &REDDIT,
        "telegram" => &TELEGRAM,
        _ => &GENERIC,
    }
}
