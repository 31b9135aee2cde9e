//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code and envelope message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use trivia_api::error::AppError;
use trivia_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_envelope() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Question",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn unprocessable_error_returns_422_envelope() {
    let err = AppError::Core(CoreError::Unprocessable("category 9 does not exist".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn validation_error_returns_422_envelope() {
    let err = AppError::Core(CoreError::Validation("difficulty out of range".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["message"], "unprocessable");
}

#[tokio::test]
async fn bad_request_error_returns_400_envelope() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "bad request");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
    assert!(!json["message"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn database_row_not_found_maps_to_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "resource not found");
}
