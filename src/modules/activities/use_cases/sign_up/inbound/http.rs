use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shell::http::{
    ActivityNamePath, EmailQuery, MessageResponse, activity_name, email_param, error_response,
};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: ActivityNamePath,
    query: EmailQuery,
) -> impl IntoResponse {
    let activity_name = match activity_name(path) {
        Ok(name) => name,
        Err(response) => return response,
    };
    let email = match email_param(query) {
        Ok(email) => email,
        Err(response) => return response,
    };

    let command = SignUp {
        activity_name,
        email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => error_response(e),
    }
}
