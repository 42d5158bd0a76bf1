//! # switchyard-core
//!
//! Core traits and data model for the switchyard dispatch library.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that writes its own predicates or actions without pulling in the standard
//! implementations from `switchyard-std`.
//!
//! # Building Blocks
//!
//! A dispatch table is an ordered list of rules evaluated top to bottom
//! against one subject. The first rule whose predicate holds produces the
//! result; when no rule holds, a default action does.
//!
//! ## [`Subject`]
//!
//! The value being dispatched on. Any thread-safe `'static` type can be a
//! subject; [`Value`] is the bundled sum type covering text, integers and
//! person records.
//!
//! ## [`Predicate`]
//!
//! A side-effect-free test against a subject. Predicates compose through
//! [`Predicate::and`], [`Predicate::or`] and [`Predicate::negate`].
//!
//! ## [`Action`]
//!
//! Produces the dispatch result from the matched subject. Any
//! `Fn(&S) -> O` closure is an action.
//!
//! ## Field Extraction
//!
//! Predicates that look at one aspect of a subject go through small
//! extraction traits ([`Numeric`], [`Tagged`], [`Discriminant`]). A subject
//! without the requested field reports `None`, which makes the predicate
//! evaluate to `false` instead of failing.
//!
//! # Error Types
//!
//! - [`ConfigurationError`] - The only error; raised when a table is built
//!   with neither rules nor a default action.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod extract;
mod predicate;
mod subject;
mod value;

// Re-exports
pub use action::{Action, BoxAction};
pub use error::ConfigurationError;
pub use extract::{Discriminant, Numeric, Tagged};
pub use predicate::{And, BoxPredicate, Not, Or, Predicate};
pub use subject::Subject;
pub use value::{Kind, Person, Role, RoleSet, Value};
