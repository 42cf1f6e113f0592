use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::withdraw::command::Withdraw;

pub fn decide_withdraw(activity: &Activity, command: &Withdraw) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    Decision::Accepted {
        events: vec![ActivityEvent::StudentWithdrawn {
            activity_name: activity.name.clone(),
            email: command.email.clone(),
        }],
    }
}
