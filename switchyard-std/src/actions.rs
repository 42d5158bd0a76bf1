//! Standard action implementations.

use switchyard_core::Action;

/// An action that always yields the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Respond<O> {
    output: O,
}

impl<S, O> Action<S, O> for Respond<O>
where
    O: Clone + Send + Sync + 'static,
{
    fn act(&self, _subject: &S) -> O {
        self.output.clone()
    }
}

/// Respond with a constant, converted into the table's output type.
///
/// ```rust,ignore
/// let table: DispatchTable<Value> = DispatchTable::builder()
///     .rule(equals("Julia"), respond("Writing code"))
///     .otherwise(respond("Watching TV"))
///     .build()?;
/// ```
pub fn respond<O>(output: impl Into<O>) -> Respond<O> {
    Respond {
        output: output.into(),
    }
}

/// An action computed from the matched subject.
pub struct FromFn<F> {
    func: F,
}

impl<S, O, F> Action<S, O> for FromFn<F>
where
    F: Fn(&S) -> O + Send + Sync + 'static,
{
    fn act(&self, subject: &S) -> O {
        (self.func)(subject)
    }
}

/// Wrap a function of the matched subject as an action.
///
/// Closures are already actions; this fixes the subject and output types up
/// front, which lets the closure's argument type be inferred.
pub fn from_fn<S, O, F>(func: F) -> FromFn<F>
where
    F: Fn(&S) -> O + Send + Sync + 'static,
{
    FromFn { func }
}
