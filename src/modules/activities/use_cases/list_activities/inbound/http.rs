use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::http::detail_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "listing activities failed");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::activities::make_chess_club;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_activities_keyed_by_name() {
        let directory = InMemoryActivityDirectory::new([make_chess_club()]);
        let response = app(AppState::new(Arc::new(directory)))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Chess Club": {
                    "description": "Learn strategies and compete in chess tournaments",
                    "schedule": "Fridays, 3:30 PM - 5:00 PM",
                    "max_participants": 12,
                    "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
                }
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_500_when_directory_is_offline() {
        let mut directory = InMemoryActivityDirectory::seeded();
        directory.toggle_offline();
        let response = app(AppState::new(Arc::new(directory)))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
