use crate::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, event: CreateCustomer) -> AppResult<Customer>;
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>>;
    // Fails with EntityNotFound when the id does not exist
    async fn update(&self, event: UpdateCustomer) -> AppResult<Customer>;
    // Reservations owned by the customer are removed along with it
    async fn delete(&self, customer_id: CustomerId) -> AppResult<()>;
}
