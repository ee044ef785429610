use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::AppState;

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("invalid email address")]
    InvalidEmail,
}

impl IntoResponse for SubscribeError {
    fn into_response(self) -> Response {
        let status = match self {
            SubscribeError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Collects a newsletter address. Logs and remembers it; repeat submissions
/// of the same address succeed without duplicating the entry.
// TODO: hand collected addresses to a real email delivery service
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, SubscribeError> {
    let email = payload.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        tracing::warn!("rejected subscribe request with invalid address");
        return Err(SubscribeError::InvalidEmail);
    }

    let mut subscribers = state.subscribers.lock().await;
    if subscribers.insert(email.clone()) {
        tracing::info!(%email, "new newsletter subscriber");
    } else {
        tracing::info!(%email, "subscriber already on the list");
    }

    Ok(Json(SubscribeResponse {
        message: "subscribed".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app(state: Arc<AppState>) -> axum::Router {
        crate::app(state)
    }

    fn subscribe_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/subscribe")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("first.last@mail.co.uk"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[tokio::test]
    async fn test_subscribe_ok() {
        let state = Arc::new(AppState::new());
        let app = test_app(state.clone());

        let response = app
            .oneshot(subscribe_request(r#"{"email": "Reader@Example.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "subscribed");

        // stored trimmed and lowercased
        let subscribers = state.subscribers.lock().await;
        assert!(subscribers.contains("reader@example.com"));
    }

    #[tokio::test]
    async fn test_subscribe_invalid_email() {
        let state = Arc::new(AppState::new());
        let app = test_app(state.clone());

        let response = app
            .oneshot(subscribe_request(r#"{"email": "not-an-email"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "invalid email address");

        assert!(state.subscribers.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_repeat_is_idempotent() {
        let state = Arc::new(AppState::new());

        for _ in 0..2 {
            let response = test_app(state.clone())
                .oneshot(subscribe_request(r#"{"email": "reader@example.com"}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(state.subscribers.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new());
        let response = test_app(state)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
