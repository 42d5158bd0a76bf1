//! # Dispatch Tables
//!
//! A [`DispatchTable`] holds an ordered list of [`Rule`]s and a default
//! action. Evaluation walks the rules in declaration order and runs the
//! action of the **first** rule whose predicate matches; later rules are not
//! consulted, even if they are more specific. When no rule matches, the
//! default action runs. Exactly one action runs per call.
//!
//! Because order decides, a guarded rule has to be listed before the
//! general rule it refines:
//!
//! ```rust,ignore
//! let table: DispatchTable<Value> = DispatchTable::builder()
//!     .rule(
//!         role_is(Role::Developer).and(project(Value::birth_year, in_range(1980..=1989))),
//!         respond("listens to metal"),
//!     )
//!     .rule(role_is(Role::Developer), respond("writes code"))
//!     .otherwise(respond("does something else"))
//!     .build()?;
//! ```
//!
//! Tables are immutable once built and are `Send + Sync`, so a single table
//! can serve any number of threads.

mod builder;
mod rule;

pub use builder::DispatchTableBuilder;
pub use rule::Rule;

use switchyard_core::{Action, BoxAction, ConfigurationError, Subject};

/// Which branch of a table produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    /// A rule matched.
    Rule {
        /// Position of the rule in declaration order.
        index: usize,
        /// The rule's label, if it has one.
        label: Option<&'a str>,
    },
    /// No rule matched; the default action ran.
    Default,
}

impl Branch<'_> {
    /// Returns true if a rule matched.
    pub fn is_rule(&self) -> bool {
        matches!(self, Branch::Rule { .. })
    }

    /// Index of the matched rule, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Branch::Rule { index, .. } => Some(*index),
            Branch::Default => None,
        }
    }
}

/// The outcome of [`DispatchTable::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a, O> {
    /// The action's result.
    pub output: O,
    /// Where the result came from.
    pub branch: Branch<'a>,
}

impl<O> Resolution<'_, O> {
    /// Discard the branch information.
    pub fn into_output(self) -> O {
        self.output
    }
}

/// An ordered, first-match dispatch table.
pub struct DispatchTable<S, O = String> {
    rules: Vec<Rule<S, O>>,
    default: BoxAction<S, O>,
}

impl<S: Subject, O: 'static> DispatchTable<S, O> {
    /// Start building a table.
    ///
    /// Call [`otherwise`](DispatchTableBuilder::otherwise) to set the default
    /// action. A builder with rules but no default still builds, and
    /// unmatched subjects then resolve to `O::default()`, which is the empty
    /// string for the default `String` output.
    pub fn builder() -> DispatchTableBuilder<S, O> {
        DispatchTableBuilder::new()
    }

    /// Build a table from rules and an optional default action.
    ///
    /// Without a default, subjects no rule matches resolve to
    /// `O::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Empty`] when `rules` is empty and no
    /// default is given.
    pub fn new(
        rules: Vec<Rule<S, O>>,
        default: Option<BoxAction<S, O>>,
    ) -> Result<Self, ConfigurationError>
    where
        O: Default,
    {
        let default = match default {
            Some(action) => action,
            None if rules.is_empty() => return Err(ConfigurationError::Empty),
            None => BoxAction::new(|_: &S| O::default()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(rules = rules.len(), "dispatch table built");

        Ok(Self { rules, default })
    }

    /// Build a table from rules and a default action. Never fails.
    pub fn with_default<A>(rules: Vec<Rule<S, O>>, default: A) -> Self
    where
        A: Action<S, O>,
    {
        Self {
            rules,
            default: BoxAction::new(default),
        }
    }

    /// Evaluate the table against `subject`.
    ///
    /// Runs the action of the first matching rule, or the default action
    /// when none match.
    #[inline]
    pub fn evaluate(&self, subject: &S) -> O {
        self.resolve(subject).output
    }

    /// Evaluate the table and report which branch produced the result.
    pub fn resolve(&self, subject: &S) -> Resolution<'_, O> {
        let matched = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(subject));

        match matched {
            Some((index, rule)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index, label = ?rule.label(), "rule matched");

                Resolution {
                    output: rule.apply(subject),
                    branch: Branch::Rule {
                        index,
                        label: rule.label(),
                    },
                }
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("no rule matched; using default");

                Resolution {
                    output: self.default.act(subject),
                    branch: Branch::Default,
                }
            }
        }
    }

    /// Index of the first rule matching `subject`, without running any
    /// action.
    pub fn matching_rule(&self, subject: &S) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(subject))
    }

    /// Number of rules, excluding the default.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules (every subject takes the default).
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = Option<&str>> {
        self.rules.iter().map(Rule::label)
    }
}

impl<S, O> std::fmt::Debug for DispatchTable<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
