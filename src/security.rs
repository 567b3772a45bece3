//! Heuristic username security scoring.

use crate::models::SecurityAssessment;

/// Usernames that are universally predictable.
pub const RESERVED_USERNAMES: &[&str] = &["admin", "root", "user", "test", "guest"];

/// Substrings that suggest the username leaks security context.
pub const SECURITY_TERMS: &[&str] = &["password", "login", "account"];

const RECOMMENDATION_OK: &str = "Username appears secure";
const RECOMMENDATION_WEAK: &str = "Use unique, non-predictable usernames";

/// Scores a username for predictability and weakness.
///
/// Starts at 10 and applies independent, non-exclusive penalties, each
/// appending an issue string. The final score is floored at 0. Total over any
/// non-empty input: no condition can fail.
pub fn assess(username: &str) -> SecurityAssessment {
    let mut score: i32 = 10;
    let mut issues: Vec<String> = Vec::new();
    let lowercase = username.to_lowercase();

    if username.chars().count() < 6 {
        issues.push("Username too short".to_string());
        score -= 2;
    }

    if RESERVED_USERNAMES.contains(&lowercase.as_str()) {
        issues.push("Common/predictable username".to_string());
        score -= 3;
    }

    if SECURITY_TERMS.iter().any(|term| lowercase.contains(term)) {
        issues.push("Contains security-related terms".to_string());
        score -= 2;
    }

    if !username.is_empty() && username.chars().all(|c| c.is_ascii_digit()) {
        issues.push("Numeric-only username".to_string());
        score -= 1;
    }

    let recommendation = if issues.is_empty() {
        RECOMMENDATION_OK
    } else {
        RECOMMENDATION_WEAK
    };

    SecurityAssessment {
        security_score: score.max(0) as u8,
        issues,
        recommendation: recommendation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_short_username() {
        let assessment = assess("admin");
        assert_eq!(assessment.security_score, 5);
        assert_eq!(
            assessment.issues,
            vec!["Username too short", "Common/predictable username"]
        );
        assert_eq!(assessment.recommendation, RECOMMENDATION_WEAK);
    }

    #[test]
    fn test_security_term_substring() {
        let assessment = assess("password123");
        assert_eq!(assessment.security_score, 8);
        assert_eq!(assessment.issues, vec!["Contains security-related terms"]);
    }

    #[test]
    fn test_clean_username() {
        let assessment = assess("superuser42");
        assert_eq!(assessment.security_score, 10);
        assert!(assessment.issues.is_empty());
        assert_eq!(assessment.recommendation, RECOMMENDATION_OK);
    }

    #[test]
    fn test_numeric_only() {
        let assessment = assess("1234567");
        assert_eq!(assessment.security_score, 9);
        assert_eq!(assessment.issues, vec!["Numeric-only username"]);
    }

    #[test]
    fn test_short_numeric_stacks_penalties() {
        let assessment = assess("123");
        assert_eq!(assessment.security_score, 7);
        assert_eq!(
            assessment.issues,
            vec!["Username too short", "Numeric-only username"]
        );
    }

    #[test]
    fn test_reserved_matching_is_case_insensitive() {
        let assessment = assess("Admin");
        assert!(assessment
            .issues
            .iter()
            .any(|i| i == "Common/predictable username"));
    }

    #[test]
    fn test_independent_penalties_stack() {
        let assessment = assess("login");
        assert_eq!(assessment.security_score, 6);
        assert_eq!(
            assessment.issues,
            vec!["Username too short", "Contains security-related terms"]
        );
    }
}
