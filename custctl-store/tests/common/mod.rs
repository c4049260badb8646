//! Shared fixture for store integration tests
//!
//! Each test gets its own SQLite file in a temp directory, a `customers`
//! table with 255-character limits enforced by CHECK constraints, and the
//! four seed customers.

#![allow(dead_code)]

use std::time::Duration;

use custctl_store::{create_pool_with_options, Customer, CustomerRepo};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const MAX_NAME_LEN: usize = 255;

pub const SEED_NAMES: [&str; 4] = ["John Woo", "Jeff Dean", "Josh Bloch", "Josh Long"];

const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name VARCHAR(255) CHECK (length(first_name) <= 255),
        last_name VARCHAR(255) CHECK (length(last_name) <= 255)
    )
"#;

/// Keeps the temp directory alive for the duration of a test.
pub struct Fixture {
    _dir: TempDir,
    pub pool: SqlitePool,
    pub repo: CustomerRepo,
}

impl Fixture {
    pub async fn count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed")
    }
}

/// Route store logs through the test harness; `RUST_LOG=debug` to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Empty `customers` table.
pub async fn empty() -> Fixture {
    init_tracing();

    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("customers.db").display());
    let pool = create_pool_with_options(&url, 4, Duration::from_secs(5))
        .await
        .expect("pool creation failed");

    sqlx::query(CREATE_CUSTOMERS)
        .execute(&pool)
        .await
        .expect("create table failed");

    let repo = CustomerRepo::new(pool.clone());
    Fixture {
        _dir: dir,
        pool,
        repo,
    }
}

/// `customers` table holding the four seed rows.
pub async fn seeded() -> Fixture {
    let fixture = empty().await;

    for name in SEED_NAMES {
        let customer = Customer::from_full_name(name).expect("seed name");
        tracing::info!("Inserting customer record for {} {}", customer.first_name, customer.last_name);
        sqlx::query("INSERT INTO customers (first_name, last_name) VALUES (?, ?)")
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .execute(&fixture.pool)
            .await
            .expect("seed insert failed");
    }

    fixture
}
