pub mod customer;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /                     banner (plain text)
/// GET  /health               service and store health
///
/// /customers                 list, create
/// /customers/{id}            get, replace, patch, delete
/// /customers/api-docs        OpenAPI document
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .merge(health::router())
        .nest("/customers", customer::router())
}

/// GET / -- plain-text service banner.
async fn banner() -> &'static str {
    "Customer API!"
}
