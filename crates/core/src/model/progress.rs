use serde::{Deserialize, Serialize};

use crate::model::ChallengeIndex;

/// Completion state across the whole catalog: which challenges are done and
/// which one the user is expected to attempt next (the frontier).
///
/// `completed` preserves insertion order and never holds duplicates, so the
/// most recent completion is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    completed: Vec<ChallengeIndex>,
    current: ChallengeIndex,
}

impl ProgressRecord {
    /// The default record: nothing completed, frontier at the first challenge.
    #[must_use]
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            current: ChallengeIndex::new(0),
        }
    }

    /// Rehydrate a record from persisted parts, dropping anything that does
    /// not address the given catalog size.
    ///
    /// Out-of-range completed indices are treated as absent; an out-of-range
    /// frontier resets to 0. Duplicates keep their first occurrence.
    #[must_use]
    pub fn from_persisted(
        completed: Vec<ChallengeIndex>,
        current: ChallengeIndex,
        catalog_len: usize,
    ) -> Self {
        let mut record = Self::new();
        for index in completed {
            if index.value() < catalog_len {
                record.mark_completed(index);
            }
        }
        if current.value() < catalog_len {
            record.current = current;
        }
        record
    }

    #[must_use]
    pub fn completed(&self) -> &[ChallengeIndex] {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn current(&self) -> ChallengeIndex {
        self.current
    }

    #[must_use]
    pub fn is_completed(&self, index: ChallengeIndex) -> bool {
        self.completed.contains(&index)
    }

    /// Record a completion. Returns `true` if the index was newly added,
    /// `false` if it was already present (the operation is idempotent).
    pub fn mark_completed(&mut self, index: ChallengeIndex) -> bool {
        if self.completed.contains(&index) {
            return false;
        }
        self.completed.push(index);
        true
    }

    /// Advance the frontier past `index`, if `index` is the frontier and a
    /// following challenge exists. Returns `true` when the frontier moved.
    ///
    /// Completing a challenge ahead of the frontier leaves it alone, and the
    /// frontier never advances past the last catalog entry.
    pub fn advance_frontier(&mut self, index: ChallengeIndex, catalog_len: usize) -> bool {
        if self.current != index {
            return false;
        }
        let next = index.next();
        if next.value() >= catalog_len {
            return false;
        }
        self.current = next;
        true
    }
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
