use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::{AnyhowRoot, Cause, ErrorStack, Root};

/// Start a new stack over `err`, or add `message` to it if it already is one.
///
/// The root of an existing stack is carried over as is, so stacks never nest.
/// `message` may be empty.
///
/// ```
/// use std::io;
///
/// let root = io::Error::new(io::ErrorKind::NotFound, "root");
/// let first = errstack::push(root, "first");
/// let second = errstack::push(first, "second");
/// assert_eq!(second.to_string(), "second|first|root");
/// ```
pub fn push(err: impl Into<Cause>, message: impl Into<String>) -> ErrorStack {
    let message = message.into();
    let stack = match err.into() {
        Cause::Stacked(stack) => stack.append(message),
        Cause::Plain(root) => ErrorStack::from_parts(Root::Error(root), vec![message]),
        Cause::Anyhow(err) => {
            ErrorStack::from_parts(Root::Anyhow(Arc::new(AnyhowRoot(err))), vec![message])
        }
    };
    trace!(depth = stack.depth(), "annotated error");
    stack
}

/// [`push`] with a message built from `format_args!`.
pub fn push_fmt(err: impl Into<Cause>, args: fmt::Arguments<'_>) -> ErrorStack {
    push(err, fmt::format(args))
}

/// Push a formatted message: `pushf!(err, "reading {}", path)`.
#[macro_export]
macro_rules! pushf {
    ($err:expr, $($arg:tt)+) => {
        $crate::push_fmt($err, ::std::format_args!($($arg)+))
    };
}
