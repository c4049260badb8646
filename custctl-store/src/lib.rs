//! custctl-store: customer record persistence
//!
//! A thin data-access layer over the `customers` table. Every operation is a
//! single parameterized statement, except [`CustomerService::bulk_create`],
//! which runs its inserts inside one transaction.
//!
//! ```ignore
//! use custctl_store::{create_pool, Customer, CustomerRepo, CustomerService, StoreConfig};
//!
//! let pool = create_pool(&StoreConfig::from_env()).await?;
//! let repo = CustomerRepo::new(pool);
//!
//! let josh = repo.create(Customer::new("Josh", "Long")).await?;
//! assert_eq!(repo.read(josh.id.unwrap()).await?.last_name, "Long");
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use config::StoreConfig;
pub use db::{create_pool, create_pool_with_options, CustomerRepo};
pub use error::{Result, StoreError};
pub use models::{Customer, ValidationError};
pub use service::CustomerService;
