mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::{ChallengeSession, RevealOutcome, SubmitOutcome, Verdict};
pub use view::SessionView;
pub use workflow::ChallengeLoopService;
