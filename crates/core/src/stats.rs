//! Completion statistics derived from the catalog and the completed set.
//!
//! Everything here is a pure function of its inputs: the same catalog and
//! completed indices always produce the same snapshot, and deriving twice
//! is indistinguishable from deriving once.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::model::{ChallengeIndex, ChallengeKind, Difficulty};

//
// ─── BUCKET COUNT ──────────────────────────────────────────────────────────────
//

/// Completed-of-total tally for one slice of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketCount {
    pub completed: usize,
    pub total: usize,
}

impl BucketCount {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Rounded completion percentage; an empty bucket is 0%, never a
    /// division by zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 * 100.0 / self.total as f64).round() as u32
    }

    /// Whether every entry in the bucket is completed. An empty bucket is
    /// trivially full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.completed == self.total
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Aggregated completion state: overall, per kind, and per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    overall: BucketCount,
    reading: BucketCount,
    watching: BucketCount,
    easy: BucketCount,
    medium: BucketCount,
    hard: BucketCount,
}

impl ProgressSnapshot {
    /// Derive a snapshot from the catalog and a set of completed indices.
    ///
    /// Out-of-range and duplicate indices are ignored, so the snapshot is
    /// well defined for any input set.
    #[must_use]
    pub fn derive(catalog: &Catalog, completed: &[ChallengeIndex]) -> Self {
        let mut snapshot = Self {
            overall: BucketCount::new(0, catalog.len()),
            reading: BucketCount::new(0, catalog.count_by_kind(ChallengeKind::Article)),
            watching: BucketCount::new(0, catalog.count_by_kind(ChallengeKind::Video)),
            easy: BucketCount::new(0, catalog.count_by_difficulty(Difficulty::Easy)),
            medium: BucketCount::new(0, catalog.count_by_difficulty(Difficulty::Medium)),
            hard: BucketCount::new(0, catalog.count_by_difficulty(Difficulty::Hard)),
        };

        let mut seen = HashSet::new();
        for &index in completed {
            let Some(challenge) = catalog.get(index) else {
                continue;
            };
            if !seen.insert(index) {
                continue;
            }

            snapshot.overall.completed += 1;
            match challenge.kind() {
                ChallengeKind::Article => snapshot.reading.completed += 1,
                ChallengeKind::Video => snapshot.watching.completed += 1,
            }
            match challenge.difficulty() {
                Difficulty::Easy => snapshot.easy.completed += 1,
                Difficulty::Medium => snapshot.medium.completed += 1,
                Difficulty::Hard => snapshot.hard.completed += 1,
            }
        }

        snapshot
    }

    #[must_use]
    pub fn overall(&self) -> BucketCount {
        self.overall
    }

    #[must_use]
    pub fn by_kind(&self, kind: ChallengeKind) -> BucketCount {
        match kind {
            ChallengeKind::Article => self.reading,
            ChallengeKind::Video => self.watching,
        }
    }

    #[must_use]
    pub fn by_difficulty(&self, difficulty: Difficulty) -> BucketCount {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    #[must_use]
    pub fn completion_percentage(&self) -> u32 {
        self.overall.percentage()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChallengeDraft, SourceRef};

    fn challenge(kind: ChallengeKind, difficulty: Difficulty) -> crate::model::Challenge {
        let media_path = match kind {
            ChallengeKind::Video => Some("/videos/test.mp4".to_string()),
            ChallengeKind::Article => None,
        };
        ChallengeDraft {
            kind,
            text: "Fill the ___.".to_string(),
            blanks: vec!["blank".to_string()],
            hints: vec!["the empty slot".to_string()],
            source: SourceRef::new("Title", "Author", None),
            media_path,
            difficulty,
        }
        .validate()
        .unwrap()
    }

    fn idx(i: usize) -> ChallengeIndex {
        ChallengeIndex::new(i)
    }

    fn three_challenge_catalog() -> Catalog {
        Catalog::new(vec![
            challenge(ChallengeKind::Article, Difficulty::Easy),
            challenge(ChallengeKind::Video, Difficulty::Medium),
            challenge(ChallengeKind::Article, Difficulty::Medium),
        ])
    }

    #[test]
    fn empty_bucket_is_zero_percent() {
        assert_eq!(BucketCount::new(0, 0).percentage(), 0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(BucketCount::new(1, 3).percentage(), 33);
        assert_eq!(BucketCount::new(2, 3).percentage(), 67);
        assert_eq!(BucketCount::new(1, 2).percentage(), 50);
        assert_eq!(BucketCount::new(3, 3).percentage(), 100);
    }

    #[test]
    fn percentage_stays_in_range() {
        for total in 0..10 {
            for completed in 0..=total {
                let pct = BucketCount::new(completed, total).percentage();
                assert!(pct <= 100, "{completed}/{total} gave {pct}");
            }
        }
    }

    #[test]
    fn empty_bucket_is_trivially_full() {
        assert!(BucketCount::new(0, 0).is_full());
        assert!(!BucketCount::new(1, 2).is_full());
    }

    #[test]
    fn derive_counts_kinds_and_difficulties() {
        let catalog = three_challenge_catalog();
        let snapshot = ProgressSnapshot::derive(&catalog, &[idx(0), idx(1)]);

        assert_eq!(snapshot.overall(), BucketCount::new(2, 3));
        assert_eq!(snapshot.by_kind(ChallengeKind::Article), BucketCount::new(1, 2));
        assert_eq!(snapshot.by_kind(ChallengeKind::Video), BucketCount::new(1, 1));
        assert_eq!(snapshot.by_difficulty(Difficulty::Easy), BucketCount::new(1, 1));
        assert_eq!(snapshot.by_difficulty(Difficulty::Medium), BucketCount::new(1, 2));
        assert_eq!(snapshot.by_difficulty(Difficulty::Hard), BucketCount::new(0, 0));
    }

    #[test]
    fn derive_ignores_out_of_range_and_duplicates() {
        let catalog = three_challenge_catalog();
        let snapshot = ProgressSnapshot::derive(&catalog, &[idx(0), idx(0), idx(42)]);

        assert_eq!(snapshot.overall(), BucketCount::new(1, 3));
        assert_eq!(snapshot.completion_percentage(), 33);
    }

    #[test]
    fn empty_catalog_derives_to_zero() {
        let catalog = Catalog::default();
        let snapshot = ProgressSnapshot::derive(&catalog, &[idx(0)]);

        assert_eq!(snapshot.completion_percentage(), 0);
        assert_eq!(snapshot.overall(), BucketCount::new(0, 0));
    }

    #[test]
    fn missing_difficulty_guard() {
        // no hard challenges at all: defined 0%, not an error
        let catalog = three_challenge_catalog();
        let snapshot = ProgressSnapshot::derive(&catalog, &[idx(0), idx(1), idx(2)]);

        assert_eq!(snapshot.by_difficulty(Difficulty::Hard).percentage(), 0);
        assert_eq!(snapshot.completion_percentage(), 100);
    }

    #[test]
    fn derive_is_deterministic() {
        let catalog = three_challenge_catalog();
        let completed = [idx(2), idx(0)];

        assert_eq!(
            ProgressSnapshot::derive(&catalog, &completed),
            ProgressSnapshot::derive(&catalog, &completed)
        );
    }
}
