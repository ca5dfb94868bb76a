use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Zero-based position of a challenge within the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeIndex(usize);

impl ChallengeIndex {
    /// Creates a new `ChallengeIndex`
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying usize value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// Returns the index of the challenge that follows this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for ChallengeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChallengeIndex({})", self.0)
    }
}

impl fmt::Display for ChallengeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an index from a string (e.g. a route segment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndexError {
    raw: String,
}

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse challenge index from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIndexError {}

impl FromStr for ChallengeIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map(ChallengeIndex::new)
            .map_err(|_| ParseIndexError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_display() {
        let index = ChallengeIndex::new(4);
        assert_eq!(index.to_string(), "4");
    }

    #[test]
    fn test_index_from_str() {
        let index: ChallengeIndex = "12".parse().unwrap();
        assert_eq!(index, ChallengeIndex::new(12));
    }

    #[test]
    fn test_index_from_str_invalid() {
        let result = "not-a-number".parse::<ChallengeIndex>();
        assert!(result.is_err());
    }

    #[test]
    fn test_index_next() {
        assert_eq!(ChallengeIndex::new(0).next(), ChallengeIndex::new(1));
    }

    #[test]
    fn test_index_roundtrip() {
        let original = ChallengeIndex::new(7);
        let serialized = original.to_string();
        let deserialized: ChallengeIndex = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
