//! Customer record model.
//!
//! `id` is assigned by the record store on save and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Record store identifier.
pub type CustomerId = i32;

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

/// Create request body. An `id` sent by the caller is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCustomer {
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[serde(default)]
    pub name: String,
}

impl NewCustomer {
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }

    /// Bind a store-assigned id.
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer { id, name: self.name }
    }
}
