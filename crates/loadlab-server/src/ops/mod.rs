//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness, 200 with an empty body
//! - `/readyz`  : readiness (503 when draining)
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

pub async fn health() -> StatusCode {
    tracing::debug!("health check invoked");
    StatusCode::OK
}

pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_draining() {
        (StatusCode::SERVICE_UNAVAILABLE, "draining")
    } else {
        (StatusCode::OK, "ready")
    }
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let stored = state.customers().stored() as u64;
    let draining = u64::from(state.is_draining());
    let body = state
        .metrics()
        .render(&[("loadlab_customers_stored", stored), ("loadlab_draining", draining)]);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
