//! Repository implementations for database access

pub mod customers;

pub use customers::{customer_from_row, CustomerRepo};
