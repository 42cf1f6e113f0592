use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::sign_up::command::SignUp;

pub fn decide_sign_up(activity: &Activity, command: &SignUp) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::StudentSignedUp {
            activity_name: activity.name.clone(),
            email: command.email.clone(),
        }],
    }
}
