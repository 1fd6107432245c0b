//! Lightweight in-process metrics and request instrumentation.
//!
//! Metrics are stored as atomics keyed by label sets and rendered by the
//! `/metrics` handler in Prometheus text format.

pub mod http;
pub mod metrics;

pub use metrics::ServerMetrics;
