//! Guards, field projection and the wildcard.

use std::marker::PhantomData;
use switchyard_core::Predicate;

/// A predicate backed by an arbitrary side-effect-free condition.
///
/// Closures are already predicates; `Guard` names the intent and fixes the
/// subject type at construction, which helps inference in rule lists.
pub struct Guard<F> {
    condition: F,
}

impl<S, F> Predicate<S> for Guard<F>
where
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    fn test(&self, subject: &S) -> bool {
        (self.condition)(subject)
    }
}

/// Match subjects for which `condition` returns `true`.
pub fn guard<S, F>(condition: F) -> Guard<F>
where
    F: Fn(&S) -> bool + Send + Sync + 'static,
{
    Guard { condition }
}

/// A predicate applied to a field extracted from the subject.
///
/// When the extractor returns `None` the subject lacks the field and the
/// projection does not match.
pub struct Project<F, P, T> {
    extract: F,
    predicate: P,
    _field: PhantomData<fn() -> T>,
}

impl<S, T, F, P> Predicate<S> for Project<F, P, T>
where
    F: Fn(&S) -> Option<T> + Send + Sync + 'static,
    P: Predicate<T>,
    T: 'static,
{
    fn test(&self, subject: &S) -> bool {
        (self.extract)(subject).is_some_and(|field| self.predicate.test(&field))
    }
}

/// Test `predicate` against the field `extract` pulls out of the subject.
///
/// ```rust,ignore
/// let eighties_kid = project(Value::birth_year, in_range(1980..=1989));
/// ```
pub fn project<S, T, F, P>(extract: F, predicate: P) -> Project<F, P, T>
where
    F: Fn(&S) -> Option<T> + Send + Sync + 'static,
    P: Predicate<T>,
{
    Project {
        extract,
        predicate,
        _field: PhantomData,
    }
}

/// The wildcard: matches every subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<S> Predicate<S> for Always {
    fn test(&self, _subject: &S) -> bool {
        true
    }
}

/// Match every subject.
pub fn always() -> Always {
    Always
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::in_range;
    use switchyard_core::{Person, Role, Value};

    #[test]
    fn test_guard_over_fields() {
        let long_name = guard(|v: &Value| v.name().is_some_and(|n| n.len() > 5));
        assert!(long_name.test(&Value::from(Person::developer("Thomas"))));
        assert!(!long_name.test(&Value::from(Person::developer("Julia"))));
        assert!(!long_name.test(&Value::from("Thomas")));
    }

    #[test]
    fn test_project_birth_year() {
        let eighties = project(Value::birth_year, in_range(1980..=1989));
        assert!(eighties.test(&Value::from(Person::developer("Julia").born(1984))));
        assert!(!eighties.test(&Value::from(Person::developer("Julia").born(1991))));
        // no birth year recorded
        assert!(!eighties.test(&Value::from(Person::developer("Julia"))));
        assert!(!eighties.test(&Value::from(1984)));
    }

    #[test]
    fn test_project_role() {
        let manager = project(Value::role, |r: &Role| *r == Role::Manager);
        assert!(manager.test(&Value::from(Person::manager("Mark"))));
        assert!(!manager.test(&Value::from(Person::developer("Julia"))));
    }

    #[test]
    fn test_always() {
        assert!(always().test(&Value::from("anything")));
        assert!(always().test(&0_i64));
    }
}
