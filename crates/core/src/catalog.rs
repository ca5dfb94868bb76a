use crate::model::{Challenge, ChallengeIndex, ChallengeKind, Difficulty};

/// The fixed, ordered list of challenges available in the app.
///
/// Read-only after construction; every [`ChallengeIndex`] in the rest of the
/// system addresses into this sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    #[must_use]
    pub fn new(challenges: Vec<Challenge>) -> Self {
        Self { challenges }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: ChallengeIndex) -> Option<&Challenge> {
        self.challenges.get(index.value())
    }

    #[must_use]
    pub fn contains(&self, index: ChallengeIndex) -> bool {
        index.value() < self.challenges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChallengeIndex, &Challenge)> {
        self.challenges
            .iter()
            .enumerate()
            .map(|(i, challenge)| (ChallengeIndex::new(i), challenge))
    }

    #[must_use]
    pub fn count_by_kind(&self, kind: ChallengeKind) -> usize {
        self.challenges.iter().filter(|c| c.kind() == kind).count()
    }

    #[must_use]
    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.challenges
            .iter()
            .filter(|c| c.difficulty() == difficulty)
            .count()
    }

    /// Indices of all challenges at the given difficulty, in catalog order.
    /// Backs the difficulty filter on the challenge list.
    #[must_use]
    pub fn indices_by_difficulty(&self, difficulty: Difficulty) -> Vec<ChallengeIndex> {
        self.iter()
            .filter(|(_, c)| c.difficulty() == difficulty)
            .map(|(i, _)| i)
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
