//! Domain types, errors and pure validation logic for the recipe catalog.
//!
//! Nothing in this crate performs I/O. The database layer (`recipe-db`) and
//! the HTTP layer (`recipe-api`) both depend on it.

pub mod error;
pub mod ingredients;
pub mod query;
pub mod types;
pub mod validation;
