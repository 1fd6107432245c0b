//! Customer record service and its HTTP handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use loadlab_core::customer::{Customer, CustomerId, NewCustomer};
use loadlab_core::error::{LoadLabError, Result};

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::store::CustomerStore;

/// Create / get / delete over an injected record store.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// No validation on `name`: empty and duplicate names are stored as-is.
    pub async fn create(&self, req: NewCustomer) -> Result<Customer> {
        tracing::info!(name = %req.name, "adding new customer");
        self.store.save(req).await
    }

    pub async fn get(&self, id: CustomerId) -> Result<Customer> {
        tracing::info!(id, "get customer");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: CustomerId) -> Result<()> {
        tracing::info!(id, "delete customer");
        if self.store.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.store.delete_by_id(id).await
    }

    pub fn stored(&self) -> usize {
        self.store.count()
    }
}

fn not_found(id: CustomerId) -> LoadLabError {
    LoadLabError::NotFound(format!("customer {id}"))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<NewCustomer>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let saved = state.customers().create(req).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customers().get(id).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> ApiResult<StatusCode> {
    state.customers().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCustomerStore;

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(MemoryCustomerStore::new()))
    }

    #[tokio::test]
    async fn create_then_get() {
        let svc = service();
        let created = svc.create(NewCustomer::named("Alice")).await.unwrap();
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, Customer { id: created.id, name: "Alice".into() });
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = service().get(404).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let c = svc.create(NewCustomer::named("Bob")).await.unwrap();
        svc.delete(c.id).await.unwrap();
        assert_eq!(svc.get(c.id).await.unwrap_err().client_code().as_str(), "NOT_FOUND");
        assert_eq!(svc.stored(), 0);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let err = service().delete(1).await.unwrap_err();
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    }
}
