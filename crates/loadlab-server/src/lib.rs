//! loadlab server library entry.
//!
//! Wires config, the customer record store, the consumption burners, ops
//! endpoints, and metrics into a single axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
pub mod store;
