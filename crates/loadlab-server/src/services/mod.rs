//! Request handlers grouped by component.
//!
//! - `consume`: CPU/memory burners
//! - `customer`: customer record CRUD over the injected store

pub mod consume;
pub mod customer;

pub use customer::CustomerService;
