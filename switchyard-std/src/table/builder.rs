//! Builder for [`DispatchTable`].

use super::{DispatchTable, Rule};
use switchyard_core::{Action, BoxAction, ConfigurationError, Predicate, Subject};

/// Collects rules in declaration order, then builds a [`DispatchTable`].
///
/// Rules are evaluated in the order they were added.
pub struct DispatchTableBuilder<S, O = String> {
    rules: Vec<Rule<S, O>>,
    default: Option<BoxAction<S, O>>,
}

impl<S: Subject, O: 'static> DispatchTableBuilder<S, O> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default: None,
        }
    }

    /// Append a rule.
    pub fn rule<P, A>(mut self, predicate: P, action: A) -> Self
    where
        P: Predicate<S>,
        A: Action<S, O>,
    {
        self.rules.push(Rule::new(predicate, action));
        self
    }

    /// Append a labeled rule.
    pub fn labeled<P, A>(mut self, label: impl Into<String>, predicate: P, action: A) -> Self
    where
        P: Predicate<S>,
        A: Action<S, O>,
    {
        self.rules.push(Rule::labeled(label, predicate, action));
        self
    }

    /// Append an already constructed rule.
    pub fn push(mut self, rule: Rule<S, O>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the default action. A later call replaces an earlier one.
    pub fn otherwise<A>(mut self, action: A) -> Self
    where
        A: Action<S, O>,
    {
        self.default = Some(BoxAction::new(action));
        self
    }

    /// Number of rules added so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules have been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Build the table.
    ///
    /// Without [`otherwise`](Self::otherwise), subjects no rule matches
    /// resolve to `O::default()`, so a `String` table answers with `""`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Empty`] when no rules and no default
    /// were given.
    pub fn build(self) -> Result<DispatchTable<S, O>, ConfigurationError>
    where
        O: Default,
    {
        DispatchTable::new(self.rules, self.default)
    }
}

impl<S: Subject, O: 'static> Default for DispatchTableBuilder<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subject, O: 'static> Extend<Rule<S, O>> for DispatchTableBuilder<S, O> {
    fn extend<I: IntoIterator<Item = Rule<S, O>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
