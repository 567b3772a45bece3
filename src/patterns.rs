//! Username pattern analysis.
//!
//! Pure string analysis combining shape flags, generated variations and the
//! security assessment. Runs independently of any network probe.

use crate::models::UsernamePatternAnalysis;
use crate::{security, variations};

/// Analyzes a username string for patterns, variations and security issues.
pub fn analyze(username: &str) -> UsernamePatternAnalysis {
    UsernamePatternAnalysis {
        length: username.chars().count(),
        has_digits: username.chars().any(|c| c.is_ascii_digit()),
        has_special_chars: username.chars().any(|c| !c.is_alphanumeric()),
        is_lowercase: is_all_lowercase(username),
        is_uppercase: is_all_uppercase(username),
        variations: variations::generate(username),
        security: security::assess(username),
    }
}

/// True when the string has at least one cased character and none uppercase.
fn is_all_lowercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// True when the string has at least one cased character and none lowercase.
fn is_all_uppercase(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_flags() {
        let analysis = analyze("dev_user42");
        assert_eq!(analysis.length, 10);
        assert!(analysis.has_digits);
        assert!(analysis.has_special_chars); // underscore
        assert!(analysis.is_lowercase);
        assert!(!analysis.is_uppercase);
    }

    #[test]
    fn test_case_flags_need_cased_characters() {
        // Digits alone are neither lowercase nor uppercase
        let analysis = analyze("12345");
        assert!(!analysis.is_lowercase);
        assert!(!analysis.is_uppercase);
    }

    #[test]
    fn test_mixed_case_sets_neither_flag() {
        let analysis = analyze("Bob");
        assert!(!analysis.is_lowercase);
        assert!(!analysis.is_uppercase);
    }

    #[test]
    fn test_uppercase_flag() {
        let analysis = analyze("BOB99");
        assert!(analysis.is_uppercase);
        assert!(!analysis.has_special_chars);
    }

    #[test]
    fn test_embeds_variations_and_security() {
        let analysis = analyze("admin");
        assert!(!analysis.variations.is_empty());
        assert_eq!(analysis.security.security_score, 5);
    }
}
