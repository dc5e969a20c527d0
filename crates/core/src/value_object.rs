//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A user agent
/// descriptor detected twice from the same header is the same descriptor, no
/// matter which allocation holds it.
///
/// ## Immutability
///
/// Once created, a value object does not change. To "modify" one, go through
/// its builder and produce a new value.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied out of builders and caches
/// - **Eq + Hash**: values are compared and used as map keys by their attributes
/// - **Debug**: values show up in logs and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Producer {
///     name: String,
///     url: String,
/// }
///
/// impl ValueObject for Producer {}
///
/// let a = Producer { name: "Mozilla".into(), url: "https://mozilla.org".into() };
/// let b = Producer { name: "Mozilla".into(), url: "https://mozilla.org".into() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
