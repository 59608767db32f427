use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde_json::{Value, json};

use crate::adapter::http::schema::pages::HomePage;
use crate::adapter::http::views::{HOME, Views};
use crate::application::app_error::AppResult;
use crate::application::interactors::session::GetSessionInteractor;

pub async fn home(interactor: GetSessionInteractor, State(views): State<Arc<Views>>) -> AppResult<Html<String>> {
    let session = interactor.execute().await;
    let email = session.map(|session| session.email.unwrap_or(session.user_id));
    views.render(HOME, &HomePage::new(email))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::tests::fakes::{ACCESS_TOKEN, FakePlatform};
    use crate::tests::helpers::{body_text, get, session_cookie, test_app};

    #[tokio::test]
    async fn test_home_for_guest_makes_no_remote_call() {
        let platform = FakePlatform::default();

        let response = get(test_app(&platform), "/", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"href="/login""#));
        assert_eq!(platform.calls(), 0);
    }

    #[tokio::test]
    async fn test_home_for_signed_in_user() {
        let platform = FakePlatform::default();
        platform.sign_in("ada@example.com");

        let response = get(test_app(&platform), "/", Some(&session_cookie(ACCESS_TOKEN))).await;

        let html = body_text(response).await;
        assert!(html.contains(r#"href="/profile""#));
        assert!(html.contains(r#"action="/logout""#));
    }

    #[tokio::test]
    async fn test_home_with_rejected_token_is_guest() {
        let platform = FakePlatform::default();

        let response = get(test_app(&platform), "/", Some(&session_cookie("stale-token"))).await;

        let html = body_text(response).await;
        assert!(html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"action="/logout""#));
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(test_app(&FakePlatform::default()), "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
