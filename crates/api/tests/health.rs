//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, body_text, get};
use customers_core::error::StoreError;
use customers_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use customers_db::store::CustomerStore;

/// A store whose every call fails, standing in for an unreachable database.
struct DownStore;

fn down() -> StoreError {
    StoreError::Database("connection refused".into())
}

#[async_trait]
impl CustomerStore for DownStore {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Err(down())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Customer>, StoreError> {
        Err(down())
    }

    async fn create(&self, _input: &CreateCustomer) -> Result<Customer, StoreError> {
        Err(down())
    }

    async fn update_by_id(
        &self,
        _id: &str,
        _input: &UpdateCustomer,
    ) -> Result<Option<Customer>, StoreError> {
        Err(down())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<Customer>, StoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_test_app(Arc::new(DownStore));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: an unreachable store surfaces as 500 "Error ..." on every route
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_store_returns_500_with_message() {
    let app = common::build_test_app(Arc::new(DownStore));
    let response = get(app, "/customers").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        "Error DatabaseError: connection refused"
    );
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
