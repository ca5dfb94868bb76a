use std::sync::Arc;

use fluent_core::Catalog;
use fluent_core::achievements::{self, AchievementStatus};
use fluent_core::model::{ChallengeIndex, ChallengeKind, Difficulty, ProgressRecord};
use fluent_core::stats::{BucketCount, ProgressSnapshot};
use storage::repository::ProgressRepository;

/// Presentation-agnostic list item for the challenge grid.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings,
/// no styling hints. The UI decides how to render completion and the
/// frontier marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeListItem {
    pub index: ChallengeIndex,
    pub kind: ChallengeKind,
    pub difficulty: Difficulty,
    pub title: String,
    pub completed: bool,
    pub is_current: bool,
}

/// Progress facade that hides the repository from the presentation layer.
///
/// The in-memory [`ProgressRecord`] is authoritative for the running
/// session. Persistence is fail-soft in both directions: corrupt or
/// unreadable stored state degrades to the defaults on load, and failed
/// writes are logged and swallowed. No persistence problem ever reaches
/// the caller as an error.
pub struct ProgressService {
    catalog: Arc<Catalog>,
    repository: Arc<dyn ProgressRepository>,
    record: ProgressRecord,
}

impl ProgressService {
    /// Create a service with the default (empty) record. Call
    /// [`load`](Self::load) to hydrate from storage.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, repository: Arc<dyn ProgressRepository>) -> Self {
        Self {
            catalog,
            repository,
            record: ProgressRecord::new(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Hydrate the record from storage.
    ///
    /// Each entry falls back to its default independently when missing or
    /// undecodable, and the result is sanitized against the catalog, so the
    /// returned record is always valid.
    pub async fn load(&mut self) -> &ProgressRecord {
        let completed = match self.repository.load_completed().await {
            Ok(Some(completed)) => completed,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "could not load completed challenges, starting fresh");
                Vec::new()
            }
        };
        let current = match self.repository.load_current().await {
            Ok(Some(current)) => current,
            Ok(None) => ChallengeIndex::new(0),
            Err(err) => {
                tracing::warn!(error = %err, "could not load frontier pointer, starting fresh");
                ChallengeIndex::new(0)
            }
        };

        self.record = ProgressRecord::from_persisted(completed, current, self.catalog.len());
        &self.record
    }

    /// Record a completion and advance the frontier when applicable.
    ///
    /// Returns `true` if the index was newly added to the completed set.
    /// The completed set is persisted before the frontier logic runs, so a
    /// stored frontier can never point past an unstored completion. Both
    /// writes are best-effort.
    pub async fn mark_completed(&mut self, index: ChallengeIndex) -> bool {
        if !self.catalog.contains(index) {
            return false;
        }

        let newly_completed = self.record.mark_completed(index);
        if newly_completed {
            self.persist_completed().await;
        }
        if self.record.advance_frontier(index, self.catalog.len()) {
            self.persist_current().await;
        }
        newly_completed
    }

    /// Restore and best-effort persist the default record.
    pub async fn reset(&mut self) -> &ProgressRecord {
        self.record = ProgressRecord::new();
        self.persist_completed().await;
        self.persist_current().await;
        &self.record
    }

    async fn persist_completed(&self) {
        if let Err(err) = self.repository.save_completed(self.record.completed()).await {
            tracing::warn!(error = %err, "could not persist completed challenges, keeping in-memory state");
        }
    }

    async fn persist_current(&self) {
        if let Err(err) = self.repository.save_current(self.record.current()).await {
            tracing::warn!(error = %err, "could not persist frontier pointer, keeping in-memory state");
        }
    }

    // ─── Derived reads ─────────────────────────────────────────────────────

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot::derive(&self.catalog, self.record.completed())
    }

    #[must_use]
    pub fn achievements(&self) -> Vec<AchievementStatus> {
        achievements::evaluate_all(&self.snapshot())
    }

    #[must_use]
    pub fn achievement_summary(&self) -> BucketCount {
        achievements::summary(&self.achievements())
    }

    /// One item per catalog challenge, in catalog order.
    #[must_use]
    pub fn overview(&self) -> Vec<ChallengeListItem> {
        self.catalog
            .iter()
            .map(|(index, challenge)| ChallengeListItem {
                index,
                kind: challenge.kind(),
                difficulty: challenge.difficulty(),
                title: challenge.source().title.clone(),
                completed: self.record.is_completed(index),
                is_current: self.record.current() == index,
            })
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_core::model::{ChallengeDraft, SourceRef};
    use storage::repository::{InMemoryRepository, ProgressRepository};

    fn idx(i: usize) -> ChallengeIndex {
        ChallengeIndex::new(i)
    }

    fn challenge(kind: ChallengeKind, difficulty: Difficulty) -> fluent_core::model::Challenge {
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

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            challenge(ChallengeKind::Article, Difficulty::Easy),
            challenge(ChallengeKind::Video, Difficulty::Medium),
            challenge(ChallengeKind::Article, Difficulty::Hard),
        ]))
    }

    #[tokio::test]
    async fn load_defaults_when_storage_is_empty() {
        let mut service = ProgressService::new(catalog(), Arc::new(InMemoryRepository::new()));
        let record = service.load().await;

        assert!(record.completed().is_empty());
        assert_eq!(record.current(), idx(0));
    }

    #[tokio::test]
    async fn load_sanitizes_out_of_range_state() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.save_completed(&[idx(0), idx(9)]).await.unwrap();
        repo.save_current(idx(7)).await.unwrap();

        let mut service = ProgressService::new(catalog(), repo);
        let record = service.load().await;

        assert_eq!(record.completed(), &[idx(0)]);
        assert_eq!(record.current(), idx(0));
    }

    #[tokio::test]
    async fn mark_completed_persists_and_advances() {
        let repo: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        let mut service = ProgressService::new(catalog(), Arc::clone(&repo));
        service.load().await;

        assert!(service.mark_completed(idx(0)).await);
        assert_eq!(service.record().current(), idx(1));

        // persisted: a fresh service sees the same state
        let mut reloaded = ProgressService::new(catalog(), repo);
        let record = reloaded.load().await;
        assert_eq!(record.completed(), &[idx(0)]);
        assert_eq!(record.current(), idx(1));
    }

    #[tokio::test]
    async fn mark_completed_is_idempotent_and_bounded() {
        let mut service = ProgressService::new(catalog(), Arc::new(InMemoryRepository::new()));
        service.load().await;

        assert!(service.mark_completed(idx(1)).await);
        assert!(!service.mark_completed(idx(1)).await);
        assert!(!service.mark_completed(idx(42)).await);
        assert_eq!(service.record().completed(), &[idx(1)]);
    }

    #[tokio::test]
    async fn frontier_stops_at_the_last_challenge() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.save_current(idx(2)).await.unwrap();

        let mut service = ProgressService::new(catalog(), repo);
        service.load().await;

        service.mark_completed(idx(2)).await;
        assert_eq!(service.record().current(), idx(2));
    }

    #[tokio::test]
    async fn reset_persists_defaults() {
        let repo: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        let mut service = ProgressService::new(catalog(), Arc::clone(&repo));
        service.load().await;
        service.mark_completed(idx(0)).await;

        service.reset().await;

        assert_eq!(repo.load_completed().await.unwrap(), Some(vec![]));
        assert_eq!(repo.load_current().await.unwrap(), Some(idx(0)));
    }

    #[tokio::test]
    async fn overview_flags_completed_and_current() {
        let mut service = ProgressService::new(catalog(), Arc::new(InMemoryRepository::new()));
        service.load().await;
        service.mark_completed(idx(0)).await;

        let items = service.overview();
        assert_eq!(items.len(), 3);
        assert!(items[0].completed);
        assert!(!items[0].is_current);
        assert!(items[1].is_current);
        assert_eq!(items[1].kind, ChallengeKind::Video);
        assert_eq!(items[2].difficulty, Difficulty::Hard);
    }

    #[tokio::test]
    async fn derived_reads_follow_the_record() {
        let mut service = ProgressService::new(catalog(), Arc::new(InMemoryRepository::new()));
        service.load().await;

        assert_eq!(service.snapshot().completion_percentage(), 0);
        assert_eq!(service.achievement_summary().completed, 0);

        service.mark_completed(idx(0)).await;
        assert_eq!(service.snapshot().completion_percentage(), 33);

        let achievements = service.achievements();
        let first_steps = achievements
            .iter()
            .find(|a| a.id == fluent_core::achievements::AchievementId::FirstSteps)
            .unwrap();
        assert!(first_steps.unlocked);
    }
}
