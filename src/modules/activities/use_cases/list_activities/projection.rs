use crate::modules::activities::core::activity::Activity;
use serde::{Deserialize, Serialize};

/// Read model of one activity, keyed by name in the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}
