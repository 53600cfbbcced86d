//! Optional plaintext gate in front of the map form.
//!
//! This is a placeholder screen, not a security mechanism. The phrase is
//! stored and compared in plain text with no attempt limit.

/// Whether `attempt` unlocks a gate configured with `expected`.
/// Surrounding whitespace in the attempt is ignored.
pub fn phrase_matches(expected: &str, attempt: &str) -> bool {
    !expected.is_empty() && expected == attempt.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_phrase() {
        assert!(phrase_matches("terrain", " terrain "));
        assert!(!phrase_matches("terrain", "Terrain"));
    }

    #[test]
    fn empty_phrase_never_matches() {
        assert!(!phrase_matches("", ""));
    }
}
