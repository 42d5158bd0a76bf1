//! The values a dispatch table decides on.

/// A type a dispatch table can be evaluated against.
///
/// Rules only see the subject through `&S`, and a built table may be shared
/// between threads, so subjects are `Send + Sync + 'static`. The
/// crate implements it for [`Value`](crate::Value) and its parts, and for
/// plain integers and text; implement it for your own record types to
/// dispatch on them directly.
///
/// ```rust,ignore
/// struct Order { total: i64 }
///
/// impl Subject for Order {}
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot dispatch on `{Self}`",
    label = "`{Self}` does not implement `Subject`",
    note = "implement `Subject` for `{Self}`; subjects must be `Send + Sync + 'static`"
)]
pub trait Subject: Send + Sync + 'static {}

impl Subject for i64 {}
impl Subject for String {}
