use async_trait::async_trait;
use fluent_core::model::ChallengeIndex;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persistence contract for quiz progress.
///
/// Progress is two logical entries in an opaque key-value store: the ordered
/// list of completed challenge indices and the frontier pointer. Loads
/// return `Ok(None)` when an entry has never been written; undecodable
/// payloads surface as `StorageError::Serialization` rather than panicking,
/// leaving the fallback policy to the caller.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the completed-challenge indices.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be read or decoded.
    async fn load_completed(&self) -> Result<Option<Vec<ChallengeIndex>>, StorageError>;

    /// Persist the completed-challenge indices, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn save_completed(&self, completed: &[ChallengeIndex]) -> Result<(), StorageError>;

    /// Fetch the frontier pointer.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be read or decoded.
    async fn load_current(&self) -> Result<Option<ChallengeIndex>, StorageError>;

    /// Persist the frontier pointer, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn save_current(&self, current: ChallengeIndex) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    completed: Arc<Mutex<Option<Vec<ChallengeIndex>>>>,
    current: Arc<Mutex<Option<ChallengeIndex>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_completed(&self) -> Result<Option<Vec<ChallengeIndex>>, StorageError> {
        let guard = self
            .completed
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_completed(&self, completed: &[ChallengeIndex]) -> Result<(), StorageError> {
        let mut guard = self
            .completed
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(completed.to_vec());
        Ok(())
    }

    async fn load_current(&self) -> Result<Option<ChallengeIndex>, StorageError> {
        let guard = self
            .current
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_current(&self, current: ChallengeIndex) -> Result<(), StorageError> {
        let mut guard = self
            .current
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(current);
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> ChallengeIndex {
        ChallengeIndex::new(i)
    }

    #[tokio::test]
    async fn round_trips_both_entries() {
        let repo = InMemoryRepository::new();

        assert_eq!(repo.load_completed().await.unwrap(), None);
        assert_eq!(repo.load_current().await.unwrap(), None);

        repo.save_completed(&[idx(0), idx(2)]).await.unwrap();
        repo.save_current(idx(1)).await.unwrap();

        assert_eq!(
            repo.load_completed().await.unwrap(),
            Some(vec![idx(0), idx(2)])
        );
        assert_eq!(repo.load_current().await.unwrap(), Some(idx(1)));
    }

    #[tokio::test]
    async fn saves_replace_prior_values() {
        let repo = InMemoryRepository::new();

        repo.save_completed(&[idx(0)]).await.unwrap();
        repo.save_completed(&[]).await.unwrap();

        assert_eq!(repo.load_completed().await.unwrap(), Some(vec![]));
    }
}
