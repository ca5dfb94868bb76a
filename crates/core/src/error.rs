use thiserror::Error;

use crate::model::ChallengeValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ChallengeValidation(#[from] ChallengeValidationError),
}
