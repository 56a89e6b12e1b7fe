use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use customers_core::error::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Every variant is rendered as a plain-text body `"Error " + message`; the
/// status comes from [`status_for`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure raised by the customer store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body or path could not be decoded.
    #[error("{0}")]
    Payload(String),
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Payload(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Payload(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Map an error to the HTTP status the client sees.
///
/// Every failure, including malformed ids, a missing document on PATCH and
/// undecodable requests, is reported as 500. Changing the mapping here is the
/// only edit needed to distinguish 400/404 from genuine server faults.
pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        // Client mistakes: candidates for 400.
        AppError::Store(StoreError::InvalidId { .. }) | AppError::Payload(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        // Candidate for 404.
        AppError::Store(StoreError::NotFound { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Store(StoreError::Database(_) | StoreError::Internal(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, %status, "Request rejected");
        }

        (status, format!("Error {self}")).into_response()
    }
}
