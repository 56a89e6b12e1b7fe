/// Failures raised by a customer store.
///
/// The `Display` output is what clients see after the `"Error "` prefix.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("CastError: Cast to id failed for value \"{value}\"")]
    InvalidId { value: String },

    #[error("Document not found: customer with id {id}")]
    NotFound { id: String },

    #[error("DatabaseError: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
