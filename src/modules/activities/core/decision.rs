use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: DecideError },
}
