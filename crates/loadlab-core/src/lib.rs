//! loadlab core: transport-agnostic domain types, error surface, and the
//! resource-consumption workloads.
//!
//! This crate defines the customer record model and the CPU/memory burners
//! shared by the HTTP server and tests. It intentionally carries no transport
//! or runtime dependencies so the workloads can be benchmarked in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `LoadLabError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod consume;
pub mod customer;
pub mod error;

/// Shared result type.
pub use error::{LoadLabError, Result};
