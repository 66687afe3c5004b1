//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request payloads that write it
//! - Query parameter structs for its list endpoint

pub mod ingredient;
pub mod recipe;
