//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts, where clients send one
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod activity_log;
pub mod points_transaction;
pub mod student;
pub mod system_stats;
