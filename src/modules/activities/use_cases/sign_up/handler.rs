use crate::modules::activities::adapters::outbound::directory::ActivityDirectory;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    /// Enrolls the student and returns the confirmation message.
    pub async fn handle(&self, command: SignUp) -> Result<String, ApplicationError> {
        let message = format!("Signed up {} for {}", command.email, command.activity_name);
        let activity_name = command.activity_name.clone();

        self.directory
            .transact(
                &activity_name,
                Box::new(move |activity: &Activity| decide_sign_up(activity, &command)),
            )
            .await
            .map_err(|e| {
                let e = ApplicationError::from(e);
                match &e {
                    ApplicationError::Unexpected(reason) => {
                        tracing::error!(activity = %activity_name, %reason, "signup failed")
                    }
                    _ => tracing::debug!(activity = %activity_name, error = %e, "signup rejected"),
                }
                e
            })?;

        tracing::info!(activity = %activity_name, "student signed up");
        Ok(message)
    }
}
