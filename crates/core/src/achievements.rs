//! Achievement rules and evaluation.
//!
//! Rules live in one ordered, declarative table: each entry pairs its
//! metadata with a pure evaluator over the derived [`ProgressSnapshot`].
//! Nothing here is persisted; unlock state is recomputed on demand and a
//! rule's condition is monotonic in the completed set, so an unlocked
//! achievement stays unlocked as completions accumulate.

use crate::model::{ChallengeKind, Difficulty};
use crate::stats::{BucketCount, ProgressSnapshot};

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstSteps,
    Bookworm,
    VisualLearner,
    EasyMastery,
    MediumMastery,
    HardMastery,
    HalfwayThere,
    MasterLinguist,
}

impl AchievementId {
    /// Stable string key, for presentation layers that need one.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSteps => "first_steps",
            Self::Bookworm => "bookworm",
            Self::VisualLearner => "visual_learner",
            Self::EasyMastery => "easy_mastery",
            Self::MediumMastery => "medium_mastery",
            Self::HardMastery => "hard_mastery",
            Self::HalfwayThere => "halfway_there",
            Self::MasterLinguist => "master_linguist",
        }
    }
}

/// Unlock state and progress toward a single rule's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleState {
    pub unlocked: bool,
    pub progress: usize,
    pub target: usize,
}

/// One achievement rule: metadata plus a pure evaluator.
pub struct AchievementRule {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    eval: fn(&ProgressSnapshot) -> RuleState,
}

impl AchievementRule {
    #[must_use]
    pub fn evaluate(&self, snapshot: &ProgressSnapshot) -> RuleState {
        (self.eval)(snapshot)
    }
}

fn mastery(bucket: BucketCount) -> RuleState {
    RuleState {
        unlocked: bucket.is_full(),
        progress: bucket.completed,
        target: bucket.total,
    }
}

/// All achievement rules, in display order.
pub static ACHIEVEMENT_RULES: &[AchievementRule] = &[
    AchievementRule {
        id: AchievementId::FirstSteps,
        title: "First Steps",
        description: "Complete your first challenge",
        eval: |s: &ProgressSnapshot| RuleState {
            unlocked: s.overall().completed >= 1,
            progress: s.overall().completed.min(1),
            target: 1,
        },
    },
    AchievementRule {
        id: AchievementId::Bookworm,
        title: "Bookworm",
        description: "Complete 3 reading challenges",
        eval: |s: &ProgressSnapshot| {
            let reading = s.by_kind(ChallengeKind::Article);
            RuleState {
                unlocked: reading.completed >= 3,
                progress: reading.completed.min(3),
                target: 3,
            }
        },
    },
    AchievementRule {
        id: AchievementId::VisualLearner,
        title: "Visual Learner",
        description: "Complete 3 watching challenges",
        eval: |s: &ProgressSnapshot| {
            let watching = s.by_kind(ChallengeKind::Video);
            RuleState {
                unlocked: watching.completed >= 3,
                progress: watching.completed.min(3),
                target: 3,
            }
        },
    },
    AchievementRule {
        id: AchievementId::EasyMastery,
        title: "Easy Mastery",
        description: "Complete all easy challenges",
        eval: |s: &ProgressSnapshot| mastery(s.by_difficulty(Difficulty::Easy)),
    },
    AchievementRule {
        id: AchievementId::MediumMastery,
        title: "Medium Mastery",
        description: "Complete all medium challenges",
        eval: |s: &ProgressSnapshot| mastery(s.by_difficulty(Difficulty::Medium)),
    },
    AchievementRule {
        id: AchievementId::HardMastery,
        title: "Hard Mastery",
        description: "Complete all hard challenges",
        eval: |s: &ProgressSnapshot| mastery(s.by_difficulty(Difficulty::Hard)),
    },
    AchievementRule {
        id: AchievementId::HalfwayThere,
        title: "Halfway There",
        description: "Complete 50% of all challenges",
        eval: |s: &ProgressSnapshot| RuleState {
            unlocked: s.completion_percentage() >= 50,
            progress: s.overall().completed,
            target: s.overall().total.div_ceil(2),
        },
    },
    AchievementRule {
        id: AchievementId::MasterLinguist,
        title: "Master Linguist",
        description: "Complete all challenges",
        eval: |s: &ProgressSnapshot| RuleState {
            unlocked: s.completion_percentage() == 100,
            progress: s.overall().completed,
            target: s.overall().total,
        },
    },
];

/// Evaluated achievement, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
    pub progress: usize,
    pub target: usize,
}

/// Evaluate every rule against the snapshot, in table order.
#[must_use]
pub fn evaluate_all(snapshot: &ProgressSnapshot) -> Vec<AchievementStatus> {
    ACHIEVEMENT_RULES
        .iter()
        .map(|rule| {
            let state = rule.evaluate(snapshot);
            AchievementStatus {
                id: rule.id,
                title: rule.title,
                description: rule.description,
                unlocked: state.unlocked,
                progress: state.progress,
                target: state.target,
            }
        })
        .collect()
}

/// Unlocked-of-total tally across a set of evaluated achievements.
#[must_use]
pub fn summary(statuses: &[AchievementStatus]) -> BucketCount {
    BucketCount::new(
        statuses.iter().filter(|status| status.unlocked).count(),
        statuses.len(),
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
