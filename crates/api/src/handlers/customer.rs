//! Handlers for the `/customers` resource.
//!
//! Each handler is a single store call; failures propagate as [`AppError`]
//! and missing documents serialize as JSON `null`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use customers_core::error::StoreError;
use customers_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};

use super::{JsonBody, PathId};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.store.find_all().await?;
    Ok(Json(customers))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer, or null if it does not exist", body = Customer),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId<String>,
) -> AppResult<Json<Option<Customer>>> {
    let customer = state.store.find_by_id(&id).await?;
    Ok(Json(customer))
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    tag = "customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 500, description = "Invalid body or store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = state.store.create(&input).await?;
    tracing::info!(customer_id = %customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /customers/{id}
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "The updated customer, or null if it does not exist", body = Customer),
        (status = 500, description = "Malformed id, invalid body or store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<String>,
    JsonBody(input): JsonBody<UpdateCustomer>,
) -> AppResult<Json<Option<Customer>>> {
    let customer = state.store.update_by_id(&id, &input).await?;
    Ok(Json(customer))
}

/// PATCH /customers/{id}
///
/// Same merge as PUT, but a missing document is an error rather than `null`.
#[utoipa::path(
    patch,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "The updated customer", body = Customer),
        (status = 500, description = "Missing customer, malformed id, invalid body or store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn patch(
    State(state): State<AppState>,
    PathId(id): PathId<String>,
    JsonBody(input): JsonBody<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    match state.store.update_by_id(&id, &input).await? {
        Some(customer) => Ok(Json(customer)),
        None => Err(AppError::Store(StoreError::NotFound { id })),
    }
}

/// DELETE /customers/{id}
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The deleted customer, or null if it did not exist", body = Customer),
        (status = 500, description = "Malformed id or store failure", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<String>,
) -> AppResult<Json<Option<Customer>>> {
    let customer = state.store.delete_by_id(&id).await?;
    if let Some(deleted) = &customer {
        tracing::info!(customer_id = %deleted.id, "Customer deleted");
    }
    Ok(Json(customer))
}
