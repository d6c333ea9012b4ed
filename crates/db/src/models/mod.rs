//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response struct for API output (credentials stripped)
//! - `Deserialize` DTOs for the write operations

pub mod post;
