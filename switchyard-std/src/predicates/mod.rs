//! Standard predicate implementations.
//!
//! | Constructor | Matches when |
//! |-------------|--------------|
//! | [`equals`] | the subject equals a constant |
//! | [`role_is`] / [`role_in`] | the subject's role tag is in a set |
//! | [`kind_is`] | the subject's variant discriminator equals a kind |
//! | [`in_range`] / [`above`] / [`below`] | the subject's number lies in a range |
//! | [`guard`] | an arbitrary condition holds |
//! | [`project`] | a predicate holds for an extracted field |
//! | [`always`] | always |
//!
//! Predicates asking for a field the subject does not have evaluate to
//! `false`.

pub mod equals;
pub mod guard;
pub mod range;
pub mod tag;

pub use equals::{Equals, equals};
pub use guard::{Always, Guard, Project, always, guard, project};
pub use range::{InRange, above, below, in_range};
pub use tag::{KindIs, RoleIn, kind_is, role_in, role_is};
