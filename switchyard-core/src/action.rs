//! # Actions
//!
//! An action computes the dispatch result from the subject its rule matched.
//! Actions see the subject by shared reference, so an action may read the
//! fields a guard just checked:
//!
//! ```rust,ignore
//! let writes_code = |v: &Value| format!("{} writes code", v.name().unwrap_or("someone"));
//! ```

/// Produces an `O` from a matched subject of type `S`.
///
/// Any `Fn(&S) -> O` closure is an action.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Action` producing `{O}` from `{S}`",
    label = "missing `Action<{S}, {O}>` implementation",
    note = "Actions must implement `act`, or be a closure `Fn(&{S}) -> {O}`."
)]
pub trait Action<S, O>: Send + Sync + 'static {
    /// Compute the result for `subject`.
    fn act(&self, subject: &S) -> O;

    /// Boxes the action.
    fn boxed(self) -> BoxAction<S, O>
    where
        Self: Sized,
        S: 'static,
        O: 'static,
    {
        BoxAction::new(self)
    }
}

impl<S, O, F> Action<S, O> for F
where
    F: Fn(&S) -> O + Send + Sync + 'static,
{
    fn act(&self, subject: &S) -> O {
        (self)(subject)
    }
}

/// A type-erased action.
pub struct BoxAction<S, O> {
    inner: Box<dyn Action<S, O>>,
}

impl<S: 'static, O: 'static> BoxAction<S, O> {
    /// Erase the concrete type of `action`.
    pub fn new<A>(action: A) -> Self
    where
        A: Action<S, O>,
    {
        Self {
            inner: Box::new(action),
        }
    }
}

impl<S: 'static, O: 'static> Action<S, O> for BoxAction<S, O> {
    fn act(&self, subject: &S) -> O {
        self.inner.act(subject)
    }

    fn boxed(self) -> BoxAction<S, O> {
        self
    }
}

impl<S, O> std::fmt::Debug for BoxAction<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxAction").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_action_reads_subject() {
        let double = |n: &i64| n * 2;
        assert_eq!(double.act(&21), 42);
    }

    #[test]
    fn test_boxed_action() {
        let describe: BoxAction<i64, String> = (|n: &i64| format!("#{n}")).boxed();
        assert_eq!(describe.act(&7), "#7");
    }
}
