//! Resource-consumption endpoints.
//!
//! Each burner runs on the blocking pool so it pins one worker thread for the
//! whole computation and leaves the async reactor free.

use std::sync::Arc;

use axum::extract::State;
use tokio::time::Instant;

use loadlab_core::consume;
use loadlab_core::error::{LoadLabError, Result};

use crate::app_state::AppState;
use crate::error::ApiResult;
use crate::obs::ServerMetrics;

/// Keeps `loadlab_consume_in_flight{op}` accurate even if the request is dropped.
struct InFlight {
    metrics: Arc<ServerMetrics>,
    op: &'static str,
}

impl InFlight {
    fn enter(metrics: Arc<ServerMetrics>, op: &'static str) -> Self {
        metrics.consume_in_flight.inc(&[("op", op)]);
        Self { metrics, op }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.metrics.consume_in_flight.dec(&[("op", self.op)]);
    }
}

async fn burn<T, F>(state: &AppState, op: &'static str, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    let _guard = InFlight::enter(state.metrics(), op);

    tokio::task::spawn_blocking(move || {
        let thread = std::thread::current();
        let thread = thread.name().unwrap_or("unnamed");
        tracing::info!(op, thread, "consume started");
        let started = Instant::now();
        let out = work();
        tracing::info!(op, thread, elapsed_ms = started.elapsed().as_millis() as u64, "consume finished");
        out
    })
    .await
    .map_err(|e| LoadLabError::Internal(format!("{op} worker failed: {e}")))?
}

pub async fn consume_cpu(State(state): State<AppState>) -> ApiResult<String> {
    let fib = burn(&state, "cpu", || Ok(consume::consume_cpu())).await?;
    Ok(format!("fib({}) is {fib}", consume::FIB_TERM))
}

pub async fn consume_memory(State(state): State<AppState>) -> ApiResult<String> {
    let v = burn(&state, "memory", consume::consume_memory).await?;
    Ok(format!("A random integer: {v}"))
}

pub async fn consume_memory_and_cpu(State(state): State<AppState>) -> ApiResult<String> {
    let v = burn(&state, "memory_and_cpu", consume::consume_memory_and_cpu).await?;
    Ok(format!("Another random integer: {v}"))
}

pub async fn legacy_consume_memory(State(state): State<AppState>) -> ApiResult<String> {
    let v = burn(&state, "memory", || consume::consume_memory_at(consume::LEGACY_SAMPLE_INDEX)).await?;
    Ok(format!("Item at {}th position was {v}", consume::LEGACY_SAMPLE_INDEX))
}

pub async fn legacy_consume_memory_and_cpu(State(state): State<AppState>) -> ApiResult<String> {
    let v = burn(&state, "memory_and_cpu", consume::consume_memory_and_cpu).await?;
    Ok(format!("Last item of the array was {v}"))
}
