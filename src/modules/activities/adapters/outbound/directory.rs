use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use async_trait::async_trait;
use thiserror::Error;

/// Runs against the current record of one activity and decides what happens to it.
pub type Decider = Box<dyn FnOnce(&Activity) -> Decision + Send>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,

    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("directory backend failure: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    /// Loads `activity_name`, applies the decider and folds the accepted
    /// events into the stored record. Check and mutation happen atomically
    /// for that activity; a rejection leaves the record untouched.
    async fn transact(
        &self,
        activity_name: &str,
        decider: Decider,
    ) -> Result<Vec<ActivityEvent>, DirectoryError>;
}
