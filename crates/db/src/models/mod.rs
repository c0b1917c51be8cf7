//! Model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Projection structs for list/detail responses
//! - The `Deserialize` DTOs its handlers accept
//!
//! DTO fields for store-required columns are `Option` on purpose:
//! required-field enforcement is delegated to the NOT NULL constraints, so a
//! missing field surfaces as a database error rather than a deserialization
//! failure.

pub mod company;
pub mod invoice;
