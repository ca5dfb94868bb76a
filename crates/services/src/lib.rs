#![forbid(unsafe_code)]

//! Stateful facades over the quiz core, consumed by the presentation layer:
//! progress loading/persistence, the per-challenge session state machine,
//! and the orchestration between them.

pub mod error;
pub mod progress_service;
pub mod sessions;

pub use error::SessionError;
pub use progress_service::{ChallengeListItem, ProgressService};

pub use sessions::{
    ChallengeLoopService, ChallengeSession, RevealOutcome, SessionView, SubmitOutcome, Verdict,
};
