use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::withdraw::inbound::http as withdraw_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Unexpected(_) => {
            return detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };
    detail_response(status, error.to_string())
}

pub type ActivityNamePath = Result<Path<String>, PathRejection>;

pub type EmailQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Decoded activity name. A segment that does not decode cannot name any
/// activity, so it is reported as not found.
pub fn activity_name(path: ActivityNamePath) -> Result<String, Response> {
    path.map(|Path(name)| name)
        .map_err(|_| error_response(ApplicationError::ActivityNotFound))
}

/// The `email` query parameter. When it is repeated the last value wins.
pub fn email_param(query: EmailQuery) -> Result<String, Response> {
    let Query(pairs) = query.map_err(|rejection| {
        detail_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .ok_or_else(|| {
            detail_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Missing query parameter `email`",
            )
        })
}

/// REST routes over the activity directory.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle).delete(withdraw_http::handle),
        )
        .with_state(state)
}

/// Full application: REST, GraphQL and the static frontend.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(router(state.clone()))
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
}
