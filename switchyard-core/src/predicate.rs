//! # Predicates
//!
//! A predicate is a pure boolean test against a subject. It receives the
//! subject by shared reference and cannot mutate it.
//!
//! Predicates compose with combinators, mirroring how guarded and range
//! patterns combine a type test with a condition:
//!
//! ```rust,ignore
//! let metal_fan = role_is(Role::Developer)
//!     .and(project(Value::birth_year, in_range(1980..=1989)));
//! ```

use std::marker::PhantomData;

/// A boolean test against a subject of type `S`.
///
/// Any `Fn(&S) -> bool` closure is a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Predicate` for `{S}`",
    label = "missing `Predicate<{S}>` implementation",
    note = "Predicates must implement `test` for the subject type `{S}`."
)]
pub trait Predicate<S>: Send + Sync + 'static {
    /// Whether the subject matches.
    fn test(&self, subject: &S) -> bool;

    /// Matches when both predicates match. `other` is not evaluated when
    /// `self` fails.
    fn and<P>(self, other: P) -> And<Self, P, S>
    where
        Self: Sized,
        P: Predicate<S>,
    {
        And {
            first: self,
            second: other,
            _subject: PhantomData,
        }
    }

    /// Matches when either predicate matches. `other` is not evaluated when
    /// `self` succeeds.
    fn or<P>(self, other: P) -> Or<Self, P, S>
    where
        Self: Sized,
        P: Predicate<S>,
    {
        Or {
            first: self,
            second: other,
            _subject: PhantomData,
        }
    }

    /// Matches when this predicate does not.
    fn negate(self) -> Not<Self, S>
    where
        Self: Sized,
    {
        Not {
            inner: self,
            _subject: PhantomData,
        }
    }

    /// Boxes the predicate.
    fn boxed(self) -> BoxPredicate<S>
    where
        Self: Sized,
        S: 'static,
    {
        BoxPredicate::new(self)
    }
}

// Blanket impl for closures
impl<S, F> Predicate<S> for F
where
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    fn test(&self, subject: &S) -> bool {
        (self)(subject)
    }
}

/// Conjunction of two predicates. See [`Predicate::and`].
///
/// `S` is fixed here even when both operands accept many subject types.
pub struct And<A, B, S> {
    first: A,
    second: B,
    _subject: PhantomData<fn(&S)>,
}

impl<S: 'static, A, B> Predicate<S> for And<A, B, S>
where
    A: Predicate<S>,
    B: Predicate<S>,
{
    fn test(&self, subject: &S) -> bool {
        self.first.test(subject) && self.second.test(subject)
    }
}

/// Disjunction of two predicates. See [`Predicate::or`].
pub struct Or<A, B, S> {
    first: A,
    second: B,
    _subject: PhantomData<fn(&S)>,
}

impl<S: 'static, A, B> Predicate<S> for Or<A, B, S>
where
    A: Predicate<S>,
    B: Predicate<S>,
{
    fn test(&self, subject: &S) -> bool {
        self.first.test(subject) || self.second.test(subject)
    }
}

/// Negation of a predicate. See [`Predicate::negate`].
pub struct Not<P, S> {
    inner: P,
    _subject: PhantomData<fn(&S)>,
}

impl<S: 'static, P> Predicate<S> for Not<P, S>
where
    P: Predicate<S>,
{
    fn test(&self, subject: &S) -> bool {
        !self.inner.test(subject)
    }
}

/// A type-erased predicate.
pub struct BoxPredicate<S> {
    inner: Box<dyn Predicate<S>>,
}

impl<S: 'static> BoxPredicate<S> {
    /// Erase the concrete type of `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<S>,
    {
        Self {
            inner: Box::new(predicate),
        }
    }
}

impl<S: 'static> Predicate<S> for BoxPredicate<S> {
    fn test(&self, subject: &S) -> bool {
        self.inner.test(subject)
    }

    fn boxed(self) -> BoxPredicate<S> {
        self
    }
}

impl<S> std::fmt::Debug for BoxPredicate<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxPredicate").finish_non_exhaustive()
    }
}
