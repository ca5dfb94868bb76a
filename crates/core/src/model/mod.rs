mod challenge;
mod ids;
mod progress;

pub use challenge::{
    BLANK_MARKER, Challenge, ChallengeDraft, ChallengeKind, ChallengeValidationError, Difficulty,
    SourceRef,
};
pub use ids::{ChallengeIndex, ParseIndexError};
pub use progress::ProgressRecord;
