//! Per-request instrumentation middleware.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::time::Instant;

use crate::app_state::AppState;

/// Count and time every routed request, labelled by its route template.
///
/// Installed with `route_layer` so `MatchedPath` is populated.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();

    let started = Instant::now();
    let res = next.run(req).await;
    let elapsed = started.elapsed();

    let status = res.status();
    let metrics = state.metrics();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("route", route.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.http_duration.observe(&[("route", route.as_str())], elapsed);

    tracing::debug!(%method, %route, status = status.as_u16(), elapsed_ms = elapsed.as_millis() as u64, "request done");
    res
}
