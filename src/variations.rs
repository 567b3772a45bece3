//! Username variation generation.

use std::collections::HashSet;

/// Maximum number of variations returned.
pub const MAX_VARIATIONS: usize = 10;

/// Generates common variations of a username.
///
/// Deterministic function of the input alone: candidates are produced in a
/// fixed order, deduplicated preserving first occurrence, and capped at
/// [`MAX_VARIATIONS`]. Candidates that happen to equal the input (for example
/// underscore removal on a name without underscores) are kept; they are valid
/// lookups in their own right.
pub fn generate(username: &str) -> Vec<String> {
    let candidates = [
        format!("{username}1"),
        format!("{username}123"),
        format!("{username}2024"),
        format!("{username}_"),
        format!("_{username}"),
        username.replace('_', ""),
        username.replace('.', ""),
        format!("{username}official"),
        format!("real{username}"),
        format!("{username}real"),
        username.to_lowercase(),
        username.to_uppercase(),
        capitalize(username),
    ];

    let mut seen = HashSet::new();
    let mut variations = Vec::new();
    for candidate in candidates {
        if variations.len() == MAX_VARIATIONS {
            break;
        }
        if seen.insert(candidate.clone()) {
            variations.push(candidate);
        }
    }
    variations
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_and_deduplicated() {
        let variations = generate("Bob");
        assert!(variations.len() <= MAX_VARIATIONS);

        let mut seen = HashSet::new();
        for v in &variations {
            assert!(seen.insert(v), "duplicate variation {v}");
        }
    }

    #[test]
    fn test_includes_lowercase_form_for_mixed_case_input() {
        let variations = generate("Bob");
        assert!(variations.iter().any(|v| v == "bob"));
    }

    #[test]
    fn test_deterministic_order() {
        assert_eq!(generate("Bob"), generate("Bob"));
        // First candidates come straight from the fixed suffix list
        let variations = generate("Bob");
        assert_eq!(variations[0], "Bob1");
        assert_eq!(variations[1], "Bob123");
        assert_eq!(variations[2], "Bob2024");
    }

    #[test]
    fn test_underscore_and_period_removal() {
        let variations = generate("a_b.c");
        assert!(variations.iter().any(|v| v == "ab.c"));
        assert!(variations.iter().any(|v| v == "a_bc"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bOB"), "Bob");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_lowercase_input_still_capped() {
        // All-lowercase short input collapses several case variants together
        let variations = generate("bob");
        assert!(variations.len() <= MAX_VARIATIONS);
        assert!(variations.iter().any(|v| v == "BOB"));
    }
}
