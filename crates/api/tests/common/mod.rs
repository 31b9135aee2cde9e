#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use trivia_api::config::ServerConfig;
use trivia_api::router::build_app_router;
use trivia_api::state::AppState;
use trivia_db::models::question::CreateQuestion;
use trivia_db::repositories::QuestionRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to [`build_app_router`] so integration tests exercise the same
/// route tree, fallbacks, and middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the router.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the router.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert `count` questions into the given category via the repository
/// layer, returning their ids in insertion order.
pub async fn seed_questions(pool: &PgPool, count: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let created = QuestionRepo::create(
            pool,
            &CreateQuestion {
                question: format!("Seed question {i}?"),
                answer: format!("Answer {i}"),
                difficulty: 2,
                category,
            },
        )
        .await
        .unwrap();
        ids.push(created.id);
    }
    ids
}
