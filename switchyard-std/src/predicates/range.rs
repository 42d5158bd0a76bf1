//! Numeric range membership.

use std::ops::{Bound, RangeBounds};
use switchyard_core::{Numeric, Predicate};

/// A predicate matching subjects whose number lies within bounds.
///
/// `a..=b` is inclusive on both ends; open ranges such as `1990..` express
/// "greater than or equal".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InRange {
    start: Bound<i64>,
    end: Bound<i64>,
}

impl InRange {
    /// Create a range predicate from any range expression.
    pub fn new<R: RangeBounds<i64>>(range: R) -> Self {
        Self {
            start: range.start_bound().cloned(),
            end: range.end_bound().cloned(),
        }
    }

    /// Whether `n` lies within the bounds.
    pub fn contains(&self, n: i64) -> bool {
        (self.start, self.end).contains(&n)
    }
}

impl<S: Numeric> Predicate<S> for InRange {
    fn test(&self, subject: &S) -> bool {
        subject.as_i64().is_some_and(|n| self.contains(n))
    }
}

/// Match subjects whose number lies in `range`.
pub fn in_range<R: RangeBounds<i64>>(range: R) -> InRange {
    InRange::new(range)
}

/// Match subjects whose number is strictly greater than `n`.
pub fn above(n: i64) -> InRange {
    InRange::new((Bound::Excluded(n), Bound::Unbounded))
}

/// Match subjects whose number is strictly less than `n`.
pub fn below(n: i64) -> InRange {
    InRange::new((Bound::Unbounded, Bound::Excluded(n)))
}
