use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::activities::use_cases::withdraw::command::Withdraw;
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

    let command = Withdraw {
        activity_name,
        email,
    };

    match state.withdraw_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod withdraw_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity_name}/signup", delete(handle))
            .with_state(state)
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_confirmation_message() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::delete("/activities/Programming%20Class/signup?email=emma@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_of(response).await,
            serde_json::json!({"message": "Unregistered emma@mergington.edu from Programming Class"})
        );
    }

    #[tokio::test]
    async fn it_should_return_400_when_student_is_not_registered() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::delete("/activities/Programming%20Class/signup?email=never@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(response).await,
            serde_json::json!({"detail": "Student is not registered for this activity"})
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_unknown_activity() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::delete("/activities/Underwater%20Basket%20Weaving/signup?email=a@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_of(response).await,
            serde_json::json!({"detail": "Activity not found"})
        );
    }

    #[tokio::test]
    async fn it_should_return_422_when_email_is_missing() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::delete("/activities/Chess%20Club/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_404_json_for_an_undecodable_activity_name() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::delete("/activities/%FF/signup?email=a@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_of(response).await,
            serde_json::json!({"detail": "Activity not found"})
        );
    }
}
