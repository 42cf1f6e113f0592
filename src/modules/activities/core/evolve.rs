use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    if event.activity_name() != activity.name {
        return activity;
    }
    match event {
        ActivityEvent::StudentSignedUp { email, .. } => {
            if !activity.has_participant(&email) {
                activity.participants.push(email);
            }
        }
        ActivityEvent::StudentWithdrawn { email, .. } => {
            activity.participants.retain(|p| *p != email);
        }
    }
    activity
}
