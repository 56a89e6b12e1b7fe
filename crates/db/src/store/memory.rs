use async_trait::async_trait;
use customers_core::error::StoreError;
use customers_core::types::{new_doc_id, parse_doc_id, DocId};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::CustomerStore;
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// In-process customer store.
///
/// Intended for tests/dev. Documents live only as long as the process and are
/// listed in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCustomerStore {
    docs: RwLock<IndexMap<DocId, Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.docs.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        Ok(self.docs.read().await.get(&id).cloned())
    }

    async fn create(&self, input: &CreateCustomer) -> Result<Customer, StoreError> {
        let customer = Customer::new(new_doc_id(), input);
        let mut docs = self.docs.write().await;
        if docs.contains_key(&customer.id) {
            return Err(StoreError::Internal(format!(
                "duplicate id {} allocated",
                customer.id
            )));
        }
        docs.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        let mut docs = self.docs.write().await;
        Ok(docs.get_mut(&id).map(|customer| {
            customer.merge(input);
            customer.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        Ok(self.docs.write().await.shift_remove(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
