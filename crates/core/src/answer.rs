//! Answer comparison for fill-in blanks.
//!
//! Matching is deliberately forgiving about presentation: leading/trailing
//! whitespace and letter case never count against the learner. Anything else
//! (spelling, inner spacing) must match the expected answer exactly.

/// Canonical form used on both sides of a comparison.
#[must_use]
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether a single entered answer matches the expected one.
#[must_use]
pub fn blank_matches(expected: &str, entered: &str) -> bool {
    normalize(expected) == normalize(entered)
}

/// Whether every entered answer matches its expected blank.
///
/// A length mismatch between the two slices is never a match.
#[must_use]
pub fn all_blanks_match(expected: &[String], entered: &[String]) -> bool {
    expected.len() == entered.len()
        && expected
            .iter()
            .zip(entered)
            .all(|(want, got)| blank_matches(want, got))
}
