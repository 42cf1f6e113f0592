use crate::modules::activities::adapters::outbound::directory::ActivityDirectory;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::withdraw::command::Withdraw;
use crate::modules::activities::use_cases::withdraw::decide::decide_withdraw;
use std::sync::Arc;

pub struct WithdrawHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> WithdrawHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    /// Withdraws the student and returns the confirmation message.
    pub async fn handle(&self, command: Withdraw) -> Result<String, ApplicationError> {
        let message = format!("Unregistered {} from {}", command.email, command.activity_name);
        let activity_name = command.activity_name.clone();

        self.directory
            .transact(
                &activity_name,
                Box::new(move |activity: &Activity| decide_withdraw(activity, &command)),
            )
            .await
            .map_err(|e| {
                let e = ApplicationError::from(e);
                match &e {
                    ApplicationError::Unexpected(reason) => {
                        tracing::error!(activity = %activity_name, %reason, "withdrawal failed")
                    }
                    _ => tracing::debug!(activity = %activity_name, error = %e, "withdrawal rejected"),
                }
                e
            })?;

        tracing::info!(activity = %activity_name, "student withdrawn");
        Ok(message)
    }
}
