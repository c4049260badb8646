//! Customer record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A row of the `customers` table.
///
/// `id` is `None` until the record has been persisted by `create` or
/// `bulk_create`; every record read back from the database carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    /// Build an unpersisted customer.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Split `"<first> <last>"` into an unpersisted customer.
    ///
    /// Splits on the first run of whitespace, so `"Mary Ann Evans"` yields
    /// first name `Mary` and last name `Ann Evans`.
    ///
    /// # Example
    /// ```
    /// use custctl_store::Customer;
    ///
    /// let c = Customer::from_full_name("Josh Bloch").unwrap();
    /// assert_eq!(c.first_name, "Josh");
    /// assert_eq!(c.last_name, "Bloch");
    /// assert!(Customer::from_full_name("Cher").is_err());
    /// ```
    pub fn from_full_name(full_name: &str) -> Result<Self, ValidationError> {
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "full name" });
        }

        match trimmed.split_once(char::is_whitespace) {
            Some((first, last)) => Ok(Self::new(first, last.trim_start())),
            None => Err(ValidationError::InvalidFormat {
                field: "full name",
                reason: "expected '<first> <last>'",
            }),
        }
    }

    /// Copy of this record carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Customer[id={}", id)?,
            None => write!(f, "Customer[id=none")?,
        }
        write!(
            f,
            ", firstName='{}', lastName='{}']",
            self.first_name, self.last_name
        )
    }
}
