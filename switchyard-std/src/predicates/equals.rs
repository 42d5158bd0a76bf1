//! Exact value equality.

use switchyard_core::Predicate;

/// A predicate matching subjects equal to a constant.
///
/// Equality goes through `S: PartialEq<V>`, so a [`Value`] subject can be
/// compared against a `&str` or an `i64` directly.
///
/// [`Value`]: switchyard_core::Value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals<V> {
    expected: V,
}

impl<V> Equals<V> {
    /// Create a new equality predicate.
    pub fn new(expected: V) -> Self {
        Self { expected }
    }

    /// The constant this predicate compares against.
    pub fn expected(&self) -> &V {
        &self.expected
    }
}

impl<S, V> Predicate<S> for Equals<V>
where
    S: PartialEq<V>,
    V: Send + Sync + 'static,
{
    fn test(&self, subject: &S) -> bool {
        *subject == self.expected
    }
}

/// Match subjects equal to `expected`.
pub fn equals<V>(expected: V) -> Equals<V> {
    Equals::new(expected)
}
