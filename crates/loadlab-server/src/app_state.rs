//! Shared application state for the loadlab server.
//!
//! The record store is injected here once at startup; handlers reach it only
//! through `CustomerService`.

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::ServerConfig;
use crate::obs::ServerMetrics;
use crate::services::CustomerService;
use crate::store::{CustomerStore, MemoryCustomerStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    customers: CustomerService,
    draining: watch::Sender<bool>,
}

impl AppState {
    /// Build state backed by the in-memory store.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_store(cfg, Arc::new(MemoryCustomerStore::new()))
    }

    pub fn with_store(cfg: ServerConfig, store: Arc<dyn CustomerStore>) -> Self {
        let (draining, _) = watch::channel(false);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                customers: CustomerService::new(store),
                draining,
            }),
            metrics: Arc::new(ServerMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn customers(&self) -> &CustomerService {
        &self.inner.customers
    }

    pub fn metrics(&self) -> Arc<ServerMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Flip readiness off. Idempotent.
    pub fn set_draining(&self) {
        self.inner.draining.send_replace(true);
    }

    pub fn is_draining(&self) -> bool {
        *self.inner.draining.borrow()
    }

    /// Resolves once `set_draining` has been called.
    pub async fn drained(&self) {
        let mut rx = self.inner.draining.subscribe();
        // Sender lives in `inner`, so the channel cannot close while we hold `self`.
        let _ = rx.wait_for(|d| *d).await;
    }
}
