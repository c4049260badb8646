//! Database layer - connection pool and repositories
//!
//! - Connection pool shared by clones of the repository
//! - Parameterized statements only; no string-built SQL
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
