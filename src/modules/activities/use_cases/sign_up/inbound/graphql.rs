use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shell::graphql::gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let message = state
            .sign_up_handler
            .handle(SignUp {
                activity_name,
                email,
            })
            .await
            .map_err(gql_error)?;
        Ok(message)
    }
}
