//! Route table and axum router wiring.
//!
//! Routes are declared once in [`route_table`] and registered in order at startup.

use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::obs::http::track_requests;
use crate::ops;
use crate::services::{consume, customer};

pub type RouteTable = Vec<(&'static str, MethodRouter<AppState>)>;

/// Path -> method handlers. Each path appears once.
pub fn route_table(cfg: &ServerConfig) -> RouteTable {
    let mut table: RouteTable = vec![
        ("/health", get(ops::health)),
        ("/readyz", get(ops::readyz)),
        ("/metrics", get(ops::metrics)),
        ("/consume/cpu", get(consume::consume_cpu)),
        ("/consume/memory", get(consume::consume_memory)),
        ("/consume/memoryAndCPU", get(consume::consume_memory_and_cpu)),
        ("/customer", post(customer::create_customer)),
        (
            "/customer/:id",
            get(customer::get_customer).delete(customer::delete_customer),
        ),
    ];

    if cfg.server.legacy_routes {
        table.extend([
            ("/consumeCPU", get(consume::consume_cpu)),
            ("/consumeMemory", get(consume::legacy_consume_memory)),
            ("/consumeMemoryAndCPU", get(consume::legacy_consume_memory_and_cpu)),
        ]);
    }
    table
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for (path, handler) in route_table(state.cfg()) {
        tracing::debug!(path, "route registered");
        router = router.route(path, handler);
    }

    router
        .route_layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
}
