//! # switchyard-std
//!
//! Standard implementations for the switchyard dispatch library.
//!
//! This crate provides:
//! - **Predicates**: [`equals`], [`role_is`], [`role_in`], [`kind_is`],
//!   [`in_range`], [`guard`], [`project`], [`always`]
//! - **Actions**: [`respond`], [`from_fn`]
//! - **Dispatch tables**: [`DispatchTable`], [`DispatchTableBuilder`], [`Rule`]
//! - **Testing spies**: [`testing`]
//!
//! [`equals`]: predicates::equals
//! [`role_is`]: predicates::role_is
//! [`role_in`]: predicates::role_in
//! [`kind_is`]: predicates::kind_is
//! [`in_range`]: predicates::in_range
//! [`guard`]: predicates::guard
//! [`project`]: predicates::project
//! [`always`]: predicates::always
//! [`respond`]: actions::respond
//! [`from_fn`]: actions::from_fn
//! [`DispatchTable`]: table::DispatchTable
//! [`DispatchTableBuilder`]: table::DispatchTableBuilder
//! [`Rule`]: table::Rule

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchyard_core;

// Modules
pub mod actions;
pub mod predicates;
pub mod table;
pub mod testing;
