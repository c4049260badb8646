//! Customer service interface
//!
//! Callers program against [`CustomerService`] rather than a concrete pool,
//! so the SQL-backed [`CustomerRepo`](crate::CustomerRepo) can be swapped for
//! another implementation in tests or embedding applications.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Customer;

#[async_trait]
pub trait CustomerService: Send + Sync + 'static {
    /// All customers whose first name equals `first_name`, in database order.
    async fn query_by_first_name(&self, first_name: &str) -> Result<Vec<Customer>>;

    /// The customer with the given id, or `StoreError::NotFound`.
    async fn read(&self, id: i64) -> Result<Customer>;

    /// Insert an unpersisted customer and return it with its assigned id.
    async fn create(&self, customer: Customer) -> Result<Customer>;

    /// Overwrite the names of a persisted customer.
    async fn update(&self, customer: &Customer) -> Result<()>;

    /// Remove a customer by id.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Insert all customers atomically, returning them in input order with
    /// ids assigned. On failure nothing from the batch is persisted.
    async fn bulk_create(&self, customers: Vec<Customer>) -> Result<Vec<Customer>>;
}
