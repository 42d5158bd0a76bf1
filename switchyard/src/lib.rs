//! # switchyard - Ordered First-Match Dispatch
//!
//! `switchyard` turns a chain of conditional branches into data: an ordered
//! list of (predicate, action) rules plus a default. Evaluation runs the
//! action of the first rule whose predicate matches; nothing after it is
//! consulted.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchyard::prelude::*;
//!
//! let favorite_task: DispatchTable<Value> = DispatchTable::builder()
//!     .rule(equals("Julia"), respond("Writing code"))
//!     .rule(equals("Thomas"), respond("Writing this blog post"))
//!     .otherwise(respond("Watching TV"))
//!     .build()?;
//!
//! assert_eq!(favorite_task.evaluate(&Value::from("Julia")), "Writing code");
//! assert_eq!(favorite_task.evaluate(&Value::from("Mark")), "Watching TV");
//! ```
//!
//! ## Expression Form
//!
//! [`dispatch_table!`] builds the same table in one expression. It always
//! has a default arm, so it cannot fail:
//!
//! ```rust,ignore
//! let decade: DispatchTable<i64> = dispatch_table! {
//!     equals(1984_i64) => respond("Read Orwell"),
//!     in_range(1980..=1989) => respond("heavy metal"),
//!     above(1989) => respond("emails"),
//!     else => respond("dance"),
//! };
//! ```
//!
//! ## Ordering
//!
//! When several rules match, the earliest one wins regardless of how
//! specific the later ones are. List guarded rules before the general rules
//! they refine.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when tables are built and evaluated.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchyard_core::{
    // Actions
    Action,
    // Predicate combinators
    And,
    BoxAction,
    BoxPredicate,
    // Errors
    ConfigurationError,
    // Field extraction
    Discriminant,
    // Data model
    Kind,
    Not,
    Numeric,
    Or,
    Person,
    Predicate,
    Role,
    RoleSet,
    // Subject
    Subject,
    Tagged,
    Value,
};

// Dispatch tables
pub use switchyard_std::table::{Branch, DispatchTable, DispatchTableBuilder, Resolution, Rule};

/// Standard predicate implementations.
pub mod predicates {
    #![allow(clippy::wildcard_imports)]
    pub use switchyard_std::predicates::*;
}

/// Standard action implementations.
pub mod actions {
    pub use switchyard_std::actions::{FromFn, Respond, from_fn, respond};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use switchyard_std::testing::*;
}

/// Prelude module - common imports for switchyard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchyard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, Branch, ConfigurationError, DispatchTable, DispatchTableBuilder, Kind, Person,
        Predicate, Resolution, Role, RoleSet, Rule, Subject, Value,
        actions::{from_fn, respond},
        dispatch_table,
        predicates::{
            above, always, below, equals, guard, in_range, kind_is, project, role_in, role_is,
        },
    };
}

/// Build a [`DispatchTable`] in switch-expression form.
///
/// Each arm is `predicate => action,`; the final `else => action` arm is the
/// default. Arms are evaluated in the order written.
///
/// ```rust,ignore
/// let role_task: DispatchTable<Value> = dispatch_table! {
///     role_is(Role::Developer) => respond("Write code"),
///     role_is(Role::Manager) => respond("Create meetings"),
///     else => respond("Listen to music"),
/// };
/// ```
#[macro_export]
macro_rules! dispatch_table {
    (
        $($predicate:expr => $action:expr,)*
        else => $default:expr $(,)?
    ) => {
        $crate::DispatchTable::with_default(
            ::std::vec![$($crate::Rule::new($predicate, $action)),*],
            $default,
        )
    };
}
