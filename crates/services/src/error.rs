//! Shared error types for the services crate.

use thiserror::Error;

use fluent_core::model::ChallengeIndex;

/// Errors emitted by challenge sessions and their orchestration.
///
/// Persistence failures never appear here: saves are best-effort and
/// swallowed (logged) because the in-memory state stays authoritative.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// The blank index does not address any blank in the active challenge.
    /// This is a caller bug, surfaced explicitly rather than panicking.
    #[error("blank index {index} out of range for {len} blanks")]
    BlankIndexOutOfRange { index: usize, len: usize },

    #[error("challenge session already completed")]
    Completed,

    #[error("no challenge at index {index}")]
    UnknownChallenge { index: ChallengeIndex },

    #[error("no active challenge session")]
    NoSession,
}
