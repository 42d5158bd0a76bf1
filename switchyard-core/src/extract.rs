//! # Field Extraction
//!
//! Predicates that inspect one aspect of a subject reach it through these
//! traits. Returning `None` means "this subject has no such field", and
//! predicates built on top treat that as a non-match.

use crate::value::Role;

/// A subject that may carry an integer.
pub trait Numeric {
    /// The integer, when the subject has one.
    fn as_i64(&self) -> Option<i64>;
}

/// A subject that may carry a [`Role`] tag.
pub trait Tagged {
    /// The role tag, when the subject has one.
    fn role(&self) -> Option<Role>;
}

/// A sum-type subject with an explicit variant discriminator.
///
/// Type-based dispatch compares this discriminator instead of inspecting
/// runtime types.
pub trait Discriminant {
    /// The discriminator type, usually a field-less enum.
    type Kind: PartialEq + Send + Sync + 'static;

    /// The subject's variant.
    fn kind(&self) -> Self::Kind;
}

macro_rules! impl_numeric {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                fn as_i64(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )+
    };
}

impl_numeric!(i8, i16, i32, i64, u8, u16, u32);

impl Numeric for u64 {
    fn as_i64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn as_i64(&self) -> Option<i64> {
        self.as_ref().and_then(Numeric::as_i64)
    }
}

impl<T: Tagged> Tagged for Option<T> {
    fn role(&self) -> Option<Role> {
        self.as_ref().and_then(Tagged::role)
    }
}
