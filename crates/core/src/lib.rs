//! `lootbag-core` — domain building blocks shared by the inventory and console.
//!
//! Pure domain primitives only (no IO).

pub mod aggregate;
pub mod error;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
