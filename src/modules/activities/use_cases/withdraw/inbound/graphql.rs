use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::withdraw::command::Withdraw;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct WithdrawMutation;

#[Object]
impl WithdrawMutation {
    async fn withdraw(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let message = state
            .withdraw_handler
            .handle(Withdraw {
                activity_name,
                email,
            })
            .await
            .map_err(gql_error)?;
        Ok(message)
    }
}
