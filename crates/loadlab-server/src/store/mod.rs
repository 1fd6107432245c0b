//! Record store abstraction for customers.
//!
//! Handlers only see `Arc<dyn CustomerStore>`; the concrete backend is chosen
//! when `AppState` is built.

pub mod memory;

use async_trait::async_trait;

use loadlab_core::customer::{Customer, CustomerId, NewCustomer};
use loadlab_core::error::Result;

pub use memory::MemoryCustomerStore;

/// save / find / delete contract over a single entity type.
///
/// Each call is atomic on its own; there are no multi-call transactions.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn save(&self, customer: NewCustomer) -> Result<Customer>;
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>>;
    /// Remove a record. Deleting an absent id is not an error at this layer.
    async fn delete_by_id(&self, id: CustomerId) -> Result<()>;
    /// Number of stored records.
    fn count(&self) -> usize;
}
