//! Request handlers, one module per resource.

pub mod customer;

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejection goes through [`AppError`], so undecodable
/// bodies get the same treatment as store failures.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejection goes through [`AppError`], so ids
/// that cannot be decoded fail like malformed ones.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathId<T>(pub T);
