#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    StudentSignedUp { activity_name: String, email: String },
    StudentWithdrawn { activity_name: String, email: String },
}

impl ActivityEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            ActivityEvent::StudentSignedUp { activity_name, .. }
            | ActivityEvent::StudentWithdrawn { activity_name, .. } => activity_name,
        }
    }
}
