use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

pub use crate::modules::activities::use_cases::list_activities::inbound::graphql::QueryRoot;
use crate::modules::activities::use_cases::sign_up::inbound::graphql::SignUpMutation;
use crate::modules::activities::use_cases::withdraw::inbound::graphql::WithdrawMutation;
use crate::modules::activities::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(SignUpMutation, WithdrawMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Client-facing error; backend failures are not described to the caller.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    match error {
        ApplicationError::Unexpected(_) => async_graphql::Error::new("Internal server error"),
        e => async_graphql::Error::new(e.to_string()),
    }
}

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state)))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
