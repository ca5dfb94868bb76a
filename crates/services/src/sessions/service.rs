use fluent_core::answer;
use fluent_core::model::{Challenge, ChallengeIndex};

use crate::error::SessionError;

//
// ─── VERDICT AND OUTCOMES ──────────────────────────────────────────────────────
//

/// Result of the most recent submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// Captures the outcome of a submit, including whether this call completed
/// the session for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub verdict: Verdict,
    pub newly_completed: bool,
}

/// Captures the outcome of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealOutcome {
    pub newly_completed: bool,
}

//
// ─── CHALLENGE SESSION ─────────────────────────────────────────────────────────
//

/// In-memory attempt state for one challenge.
///
/// Lives from the moment a challenge view opens until it closes or the user
/// navigates to a different challenge. Completion latches: once a correct
/// submit or a reveal has happened, the session stays completed, and the
/// `newly_completed` flag on the outcome fires exactly once so the owner can
/// run the completion side effect without double-counting.
#[derive(Debug)]
pub struct ChallengeSession {
    index: ChallengeIndex,
    challenge: Challenge,
    answers: Vec<String>,
    revealed: bool,
    verdict: Verdict,
    completed: bool,
}

impl ChallengeSession {
    /// Create a fresh session with empty answers sized to the challenge's
    /// blank count.
    #[must_use]
    pub fn new(index: ChallengeIndex, challenge: Challenge) -> Self {
        let answers = vec![String::new(); challenge.blank_count()];
        Self {
            index,
            challenge,
            answers,
            revealed: false,
            verdict: Verdict::Unknown,
            completed: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> ChallengeIndex {
        self.index
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record the answer entered for one blank.
    ///
    /// Editing is allowed in any non-terminal state, including after an
    /// incorrect submit (retry).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BlankIndexOutOfRange` for an invalid blank
    /// index and `SessionError::Completed` once the session is completed.
    pub fn set_answer(
        &mut self,
        blank: usize,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        let len = self.answers.len();
        let Some(slot) = self.answers.get_mut(blank) else {
            return Err(SessionError::BlankIndexOutOfRange { index: blank, len });
        };
        *slot = value.into();
        Ok(())
    }

    /// Check every blank against its expected answer.
    ///
    /// Comparison is case-insensitive and whitespace-trimmed; all blanks
    /// must match for a `Correct` verdict. An incorrect submit keeps the
    /// entered answers for editing. Submitting an already-completed session
    /// is a no-op that returns the prior verdict.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.completed {
            return SubmitOutcome {
                verdict: self.verdict,
                newly_completed: false,
            };
        }

        if answer::all_blanks_match(self.challenge.blanks(), &self.answers) {
            self.verdict = Verdict::Correct;
            self.completed = true;
            SubmitOutcome {
                verdict: Verdict::Correct,
                newly_completed: true,
            }
        } else {
            self.verdict = Verdict::Incorrect;
            SubmitOutcome {
                verdict: Verdict::Incorrect,
                newly_completed: false,
            }
        }
    }

    /// Fill every blank with its expected answer and complete the session.
    ///
    /// Valid in any state and idempotent: revealing twice leaves the same
    /// state as revealing once, and `newly_completed` fires only on the
    /// first transition into a completed state.
    pub fn reveal(&mut self) -> RevealOutcome {
        let newly_completed = !self.completed;
        self.answers = self.challenge.blanks().to_vec();
        self.revealed = true;
        self.completed = true;
        RevealOutcome { newly_completed }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
