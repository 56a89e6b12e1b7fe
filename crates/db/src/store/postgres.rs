use async_trait::async_trait;
use customers_core::error::StoreError;
use customers_core::types::{new_doc_id, parse_doc_id};

use super::CustomerStore;
use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use crate::repositories::CustomerRepo;
use crate::DbPool;

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(err: sqlx::Error) -> StoreError {
    tracing::debug!(error = %err, "customer query failed");
    StoreError::Database(err.to_string())
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn find_all(&self) -> Result<Vec<Customer>, StoreError> {
        CustomerRepo::list(&self.pool).await.map_err(db_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        CustomerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(db_error)
    }

    async fn create(&self, input: &CreateCustomer) -> Result<Customer, StoreError> {
        CustomerRepo::create(&self.pool, new_doc_id(), input)
            .await
            .map_err(db_error)
    }

    async fn update_by_id(
        &self,
        id: &str,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        CustomerRepo::update(&self.pool, id, input)
            .await
            .map_err(db_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Customer>, StoreError> {
        let id = parse_doc_id(id)?;
        CustomerRepo::delete(&self.pool, id).await.map_err(db_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(db_error)
    }
}
