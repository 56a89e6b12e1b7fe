//! The customer store seam.
//!
//! Handlers only ever see `Arc<dyn CustomerStore>`. Identifiers arrive as raw
//! path segments; rejecting malformed ones is the store's job.

mod memory;
mod postgres;

use async_trait::async_trait;
use customers_core::error::StoreError;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

pub use memory::MemoryCustomerStore;
pub use postgres::PgCustomerStore;

/// Five primitive operations over a single collection of customers, plus a
/// reachability check.
///
/// `None` results mean "no document with that id"; they are never errors.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every document in the collection. No ordering is promised.
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError>;

    /// Allocate an id and persist `input` under it.
    async fn create(&self, input: &CreateCustomer) -> Result<Customer, StoreError>;

    /// Merge-write the supplied fields. No write happens when nothing matches.
    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, StoreError>;

    /// Remove the document and return what was removed.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
