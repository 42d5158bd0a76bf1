//! A single (predicate, action) pair.

use switchyard_core::{Action, BoxAction, BoxPredicate, Predicate, Subject};

/// One entry of a [`DispatchTable`]: a predicate, the action it guards and
/// an optional label for diagnostics.
///
/// [`DispatchTable`]: super::DispatchTable
pub struct Rule<S, O> {
    label: Option<String>,
    predicate: BoxPredicate<S>,
    action: BoxAction<S, O>,
}

impl<S: Subject, O: 'static> Rule<S, O> {
    /// Create an unlabeled rule.
    pub fn new<P, A>(predicate: P, action: A) -> Self
    where
        P: Predicate<S>,
        A: Action<S, O>,
    {
        Self {
            label: None,
            predicate: BoxPredicate::new(predicate),
            action: BoxAction::new(action),
        }
    }

    /// Create a labeled rule.
    pub fn labeled<P, A>(label: impl Into<String>, predicate: P, action: A) -> Self
    where
        P: Predicate<S>,
        A: Action<S, O>,
    {
        Self::new(predicate, action).with_label(label)
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The rule's label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether this rule's predicate accepts `subject`.
    #[inline]
    pub fn matches(&self, subject: &S) -> bool {
        self.predicate.test(subject)
    }

    /// Run this rule's action.
    #[inline]
    pub fn apply(&self, subject: &S) -> O {
        self.action.act(subject)
    }
}

impl<S, O> std::fmt::Debug for Rule<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
