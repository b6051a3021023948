//! Annotating errors in place on a `Result`.
//!
//! ```
//! use errstack::{ErrorStack, ResultExt};
//!
//! fn read_config() -> Result<String, ErrorStack> {
//!     std::fs::read_to_string("/definitely/not/here.toml").annotate("read_config")
//! }
//!
//! let err = read_config().unwrap_err();
//! assert!(err.root_is::<std::io::Error>());
//! ```

use std::fmt;

use crate::stack::{push, Cause, ErrorStack};

/// Extension trait pushing a message onto the error of a `Result`.
///
/// Works for any error convertible into [`Cause`], so it applies equally to
/// plain errors and to results that already carry an [`ErrorStack`].
pub trait ResultExt<T> {
    fn annotate(self, message: impl Into<String>) -> Result<T, ErrorStack>;

    /// Like [`annotate`](ResultExt::annotate) but only builds the message on
    /// the error path.
    fn annotate_with<F, S>(self, f: F) -> Result<T, ErrorStack>
    where
        F: FnOnce() -> S,
        S: Into<String>;

    fn annotate_fmt(self, args: fmt::Arguments<'_>) -> Result<T, ErrorStack>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn annotate(self, message: impl Into<String>) -> Result<T, ErrorStack> {
        self.map_err(|e| push::push(e, message))
    }

    fn annotate_with<F, S>(self, f: F) -> Result<T, ErrorStack>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| push::push(e, f()))
    }

    fn annotate_fmt(self, args: fmt::Arguments<'_>) -> Result<T, ErrorStack> {
        self.map_err(|e| push::push_fmt(e, args))
    }
}

/// Annotate the error of a `Result` with a formatted message.
///
/// `annotate!(std::fs::read(path), "reading {}", path.display())`
#[macro_export]
macro_rules! annotate {
    ($expr:expr, $($arg:tt)+) => {
        $crate::ResultExt::annotate_fmt($expr, ::std::format_args!($($arg)+))
    };
}
