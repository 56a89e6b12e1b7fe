use crate::error::StoreError;

/// Customer documents are keyed by a UUID assigned by the store.
pub type DocId = uuid::Uuid;

/// Parse a raw path segment into a [`DocId`].
///
/// Anything that is not a well-formed UUID is rejected with
/// [`StoreError::InvalidId`], carrying the raw value for the error message.
pub fn parse_doc_id(raw: &str) -> Result<DocId, StoreError> {
    DocId::parse_str(raw).map_err(|_| StoreError::InvalidId {
        value: raw.to_string(),
    })
}

/// Allocate a fresh document identifier.
pub fn new_doc_id() -> DocId {
    DocId::new_v4()
}
