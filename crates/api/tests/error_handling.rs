//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use customers_api::error::{status_for, AppError};
use customers_core::error::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and body text.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    assert!(response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/plain")));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn invalid_id_returns_500_with_cast_message() {
    let err = AppError::Store(StoreError::InvalidId {
        value: "xyz".into(),
    });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error CastError: Cast to id failed for value \"xyz\"");
}

#[tokio::test]
async fn not_found_returns_500() {
    let err = AppError::Store(StoreError::NotFound { id: "abc".into() });

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error Document not found: customer with id abc");
}

#[tokio::test]
async fn payload_error_returns_500() {
    let err = AppError::Payload("expected value at line 1 column 1".into());

    let (status, body) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error expected value at line 1 column 1");
}

#[test]
fn every_variant_maps_to_500() {
    let errors = [
        AppError::Store(StoreError::InvalidId { value: "x".into() }),
        AppError::Store(StoreError::NotFound { id: "x".into() }),
        AppError::Store(StoreError::Database("down".into())),
        AppError::Store(StoreError::Internal("poisoned".into())),
        AppError::Payload("bad".into()),
    ];

    for err in &errors {
        assert_eq!(status_for(err), StatusCode::INTERNAL_SERVER_ERROR, "{err:?}");
    }
}
