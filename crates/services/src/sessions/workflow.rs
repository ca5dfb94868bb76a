use std::sync::Arc;

use fluent_core::Catalog;
use fluent_core::model::ChallengeIndex;
use storage::repository::ProgressRepository;

use super::service::{ChallengeSession, RevealOutcome, SubmitOutcome};
use super::view::SessionView;
use crate::error::SessionError;
use crate::progress_service::ProgressService;

/// Orchestrates challenge navigation, answering, and progress updates.
///
/// Owns at most one [`ChallengeSession`] at a time and wires its completion
/// signal into the progress record: on the first completion the index is
/// persisted to the completed set before the frontier logic runs, exactly
/// once per session.
pub struct ChallengeLoopService {
    catalog: Arc<Catalog>,
    progress: ProgressService,
    session: Option<ChallengeSession>,
}

impl ChallengeLoopService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn ProgressRepository>) -> Self {
        let progress = ProgressService::new(Arc::clone(&catalog), repository);
        Self {
            catalog,
            progress,
            session: None,
        }
    }

    /// Hydrate the progress record from storage (fail-soft).
    pub async fn load(&mut self) {
        self.progress.load().await;
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn session(&self) -> Option<&ChallengeSession> {
        self.session.as_ref()
    }

    /// Snapshot of the active session for the presentation layer.
    #[must_use]
    pub fn view(&self) -> Option<SessionView> {
        self.session.as_ref().map(SessionView::from_session)
    }

    /// Open the challenge at `index`, discarding any session for a
    /// different challenge. Re-selecting the active index keeps the
    /// in-flight session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownChallenge` if the index is not in the
    /// catalog.
    pub fn switch_challenge(
        &mut self,
        index: ChallengeIndex,
    ) -> Result<&ChallengeSession, SessionError> {
        if self.session.as_ref().is_none_or(|s| s.index() != index) {
            let challenge = self
                .catalog
                .get(index)
                .cloned()
                .ok_or(SessionError::UnknownChallenge { index })?;
            self.session = Some(ChallengeSession::new(index, challenge));
        }
        self.session.as_ref().ok_or(SessionError::NoSession)
    }

    /// Record an answer for one blank of the active session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSession` without an active session, and
    /// propagates the session's own errors.
    pub fn set_answer(
        &mut self,
        blank: usize,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.session
            .as_mut()
            .ok_or(SessionError::NoSession)?
            .set_answer(blank, value)
    }

    /// Submit the active session and apply the completion side effect on a
    /// first-time correct answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSession` without an active session.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoSession)?;
        let index = session.index();
        let outcome = session.submit();
        if outcome.newly_completed {
            self.progress.mark_completed(index).await;
        }
        Ok(outcome)
    }

    /// Reveal the active session's answers and apply the completion side
    /// effect if the session was not completed yet.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSession` without an active session.
    pub async fn reveal(&mut self) -> Result<RevealOutcome, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoSession)?;
        let index = session.index();
        let outcome = session.reveal();
        if outcome.newly_completed {
            self.progress.mark_completed(index).await;
        }
        Ok(outcome)
    }

    /// Reset all progress to the defaults (best-effort persisted). The
    /// active session, if any, is left untouched.
    pub async fn reset_progress(&mut self) {
        self.progress.reset().await;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
