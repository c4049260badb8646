//! Domain models
//!
//! Malformed input returns ValidationError, not panic.

pub mod customer;
pub mod validation;

pub use customer::Customer;
pub use validation::ValidationError;
