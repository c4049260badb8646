//! Customer repository
//!
//! One fixed parameterized statement per operation. `bulk_create` runs the
//! same insert as `create` on a single transaction and rolls the whole batch
//! back on the first failure.

use async_trait::async_trait;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::{Executor, Row};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, StoreError};
use crate::models::Customer;
use crate::service::CustomerService;

const SELECT_BY_FIRST_NAME: &str =
    "SELECT id, first_name, last_name FROM customers WHERE first_name = ?";

const SELECT_BY_ID: &str = "SELECT id, first_name, last_name FROM customers WHERE id = ?";

const INSERT: &str = "INSERT INTO customers (first_name, last_name) VALUES (?, ?) RETURNING id";

const UPDATE: &str = "UPDATE customers SET first_name = ?, last_name = ? WHERE id = ?";

const DELETE: &str = "DELETE FROM customers WHERE id = ?";

/// Map a `(id, first_name, last_name)` row to a persisted customer.
pub fn customer_from_row(row: &SqliteRow) -> std::result::Result<Customer, sqlx::Error> {
    Ok(Customer {
        id: Some(row.try_get("id")?),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
    })
}

/// Insert one customer on any executor (pool or open transaction).
async fn insert<'e, E>(executor: E, mut customer: Customer) -> Result<Customer>
where
    E: Executor<'e, Database = Sqlite>,
{
    if let Some(id) = customer.id {
        return Err(StoreError::AlreadyPersisted(id));
    }

    let id: i64 = sqlx::query_scalar(INSERT)
        .bind(customer.first_name.as_str())
        .bind(customer.last_name.as_str())
        .fetch_one(executor)
        .await?;

    debug!(id, "inserted customer");
    customer.id = Some(id);
    Ok(customer)
}

/// SQL-backed customer repository.
///
/// Cheap to clone; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct CustomerRepo {
    pool: SqlitePool,
}

impl CustomerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CustomerService for CustomerRepo {
    #[instrument(skip(self))]
    async fn query_by_first_name(&self, first_name: &str) -> Result<Vec<Customer>> {
        let rows = sqlx::query(SELECT_BY_FIRST_NAME)
            .bind(first_name)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "query by first name");
        let customers = rows
            .iter()
            .map(customer_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(customers)
    }

    #[instrument(skip(self))]
    async fn read(&self, id: i64) -> Result<Customer> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::customer_not_found(id))?;

        Ok(customer_from_row(&row)?)
    }

    #[instrument(skip_all)]
    async fn create(&self, customer: Customer) -> Result<Customer> {
        insert(&self.pool, customer).await
    }

    #[instrument(skip_all, fields(id = ?customer.id))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let id = customer.id.ok_or(StoreError::MissingId)?;

        let result = sqlx::query(UPDATE)
            .bind(customer.first_name.as_str())
            .bind(customer.last_name.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::customer_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::customer_not_found(id));
        }
        Ok(())
    }

    #[instrument(skip_all, fields(count = customers.len()))]
    async fn bulk_create(&self, customers: Vec<Customer>) -> Result<Vec<Customer>> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(customers.len());

        for (index, customer) in customers.into_iter().enumerate() {
            match insert(&mut *tx, customer).await {
                Ok(customer) => created.push(customer),
                Err(err) => {
                    warn!(index, error = %err, "bulk create failed, rolling back");
                    if let Err(rollback_err) = tx.rollback().await {
                        warn!(error = %rollback_err, "rollback failed");
                    }
                    return Err(err);
                }
            }
        }

        tx.commit().await?;
        info!(count = created.len(), "bulk create committed");
        Ok(created)
    }
}
