use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use loadlab_core::customer::{Customer, CustomerId, NewCustomer};
use loadlab_core::error::{LoadLabError, Result};

use super::CustomerStore;

/// In-process store: id -> record, ids handed out from a shared sequence.
pub struct MemoryCustomerStore {
    records: DashMap<CustomerId, Customer>,
    next_id: AtomicI32,
}

impl Default for MemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }

    fn allocate_id(&self) -> Result<CustomerId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if id <= 0 {
            // wrapped past i32::MAX
            return Err(LoadLabError::Internal("customer id sequence exhausted".into()));
        }
        Ok(id)
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn save(&self, customer: NewCustomer) -> Result<Customer> {
        let id = self.allocate_id()?;
        let stored = customer.into_customer(id);
        self.records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.records.get(&id).map(|r| r.value().clone()))
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<()> {
        self.records.remove(&id);
        Ok(())
    }

    fn count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = MemoryCustomerStore::new();
        let a = store.save(NewCustomer::named("Alice")).await.unwrap();
        let b = store.save(NewCustomer::named("Alice")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.count(), 2);
    }

    #[tokio::test]
    async fn find_and_delete() {
        let store = MemoryCustomerStore::new();
        let c = store.save(NewCustomer::named("Bob")).await.unwrap();
        assert_eq!(store.find_by_id(c.id).await.unwrap(), Some(c.clone()));

        store.delete_by_id(c.id).await.unwrap();
        assert_eq!(store.find_by_id(c.id).await.unwrap(), None);
        // idempotent at the store layer
        store.delete_by_id(c.id).await.unwrap();
        assert_eq!(store.count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_never_share_an_id() {
        let store = Arc::new(MemoryCustomerStore::new());
        let mut handles = Vec::new();
        for i in 0..200 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.save(NewCustomer::named(format!("c{i}"))).await.unwrap().id
            }));
        }
        let mut ids = HashSet::new();
        for h in handles {
            assert!(ids.insert(h.await.unwrap()));
        }
        assert_eq!(ids.len(), 200);
        assert_eq!(store.count(), 200);
    }

    #[tokio::test]
    async fn exhausted_sequence_is_an_error() {
        let store = MemoryCustomerStore::new();
        store.next_id.store(i32::MAX, Ordering::Relaxed);
        assert!(store.save(NewCustomer::named("last")).await.is_ok());
        let err = store.save(NewCustomer::named("overflow")).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "INTERNAL");
    }
}
