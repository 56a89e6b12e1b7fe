//! Route definitions for the `/customers` resource.

use axum::routing::get;
use axum::{Json, Router};

use crate::handlers::customer;
use crate::openapi;
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /api-docs    -> api_docs
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// PATCH  /{id}        -> patch
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(customer::list).post(customer::create))
        .route("/api-docs", get(api_docs))
        .route(
            "/{id}",
            get(customer::get_by_id)
                .put(customer::update)
                .patch(customer::patch)
                .delete(customer::delete),
        )
}

/// GET /customers/api-docs
async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::document())
}
