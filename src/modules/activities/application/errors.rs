use crate::modules::activities::adapters::outbound::directory::DirectoryError;
use crate::modules::activities::core::decision::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<DirectoryError> for ApplicationError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::NotFound => ApplicationError::ActivityNotFound,
            DirectoryError::Rejected(reason) => ApplicationError::Domain(reason),
            DirectoryError::Backend(message) => ApplicationError::Unexpected(message),
        }
    }
}
