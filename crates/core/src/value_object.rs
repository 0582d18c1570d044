//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Two value objects with the same attribute values are the same value. An
/// inventory may hold several equal items; nothing ties them to a slot.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
