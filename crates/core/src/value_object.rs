//! Value object trait: equality by value, not identity.
//!
//! Submissions, classified submissions, products and outcomes are all value
//! objects: they carry no identity of their own and are never mutated after
//! construction. A product only gains an identity once a store persists it.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Weight(f64);
///
/// impl ValueObject for Weight {}
///
/// assert_eq!(Weight(1.0), Weight(1.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
