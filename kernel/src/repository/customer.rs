use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    customer::{
        event::{CreateCustomer, DeleteCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId>;
    // Newest customers first
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    // Name/email/phone search ordered by name
    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<Customer>>;
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>>;
    async fn update(&self, event: UpdateCustomer) -> AppResult<()>;
    async fn delete(&self, event: DeleteCustomer) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}
