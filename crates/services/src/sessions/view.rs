use fluent_core::model::ChallengeIndex;

use super::service::{ChallengeSession, Verdict};

/// Aggregated view of a challenge session, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub index: ChallengeIndex,
    pub answers: Vec<String>,
    pub verdict: Verdict,
    pub revealed: bool,
    pub completed: bool,
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &ChallengeSession) -> Self {
        Self {
            index: session.index(),
            answers: session.answers().to_vec(),
            verdict: session.verdict(),
            revealed: session.revealed(),
            completed: session.is_completed(),
        }
    }
}
