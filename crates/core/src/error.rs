//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: the operation that produced it left
/// the inventory untouched, and the caller decides how to surface it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The inventory already holds `capacity` items.
    #[error("inventory is full (capacity {capacity})")]
    Full { capacity: usize },

    /// No item matched the requested name.
    #[error("not found")]
    NotFound,

    /// The operation needs at least one item and the inventory has none.
    #[error("inventory is empty")]
    Empty,

    /// A value failed validation (e.g. blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A bounded text field exceeded its maximum length (in characters).
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl DomainError {
    pub fn full(capacity: usize) -> Self {
        Self::Full { capacity }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn too_long(field: &'static str, max: usize) -> Self {
        Self::TooLong { field, max }
    }

    /// `true` for the lookup failures a user can fix by typing another name.
    ///
    /// `Empty` counts as a lookup failure: an empty inventory and a missing name
    /// are both reported as "not there" to the end user.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::NotFound | Self::Empty)
    }
}
