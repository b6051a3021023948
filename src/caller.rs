//! Caller-name annotations.
//!
//! Rust exposes no stable way to read symbol names from the running call
//! stack, so the enclosing function is found at compile time instead:
//! [`caller_name!`] declares a marker fn inside the caller and reads the
//! marker's `type_name`, which is the caller's path plus the marker segment.
//! Closure segments are dropped so a closure reports the fn it lives in.
//!
//! Resolution never fails the push. When the marker segment is missing the
//! name is [`CALLER_LOOKUP_FAILED`], and when nothing is left after stripping
//! it the name is [`CALLER_SYMBOL_MISSING`].

use serde::{Deserialize, Serialize};

/// Pushed when the caller could not be located.
pub const CALLER_LOOKUP_FAILED: &str = "* !ok *";

/// Pushed when the caller was located but has no usable name.
pub const CALLER_SYMBOL_MISSING: &str = "* nil *";

#[doc(hidden)]
pub const MARKER: &str = "__errstack_caller";

const CLOSURE_SEGMENT: &str = "{{closure}}";

/// How much of the caller path ends up in the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerStyle {
    /// Full module path, e.g. `app::loader::read_config`.
    #[default]
    Full,
    /// Last path segment only, e.g. `read_config`.
    Short,
}

impl CallerStyle {
    pub fn apply(self, name: String) -> String {
        match self {
            CallerStyle::Full => name,
            CallerStyle::Short => short_name(&name).to_string(),
        }
    }
}

impl std::str::FromStr for CallerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(CallerStyle::Full),
            "short" => Ok(CallerStyle::Short),
            other => Err(other.to_string()),
        }
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// Turn the `type_name` of a caller marker into the caller's name.
pub fn resolve(raw: &str) -> String {
    let Some(path) = raw
        .strip_suffix(MARKER)
        .map(|p| p.strip_suffix("::").unwrap_or(p))
    else {
        return CALLER_LOOKUP_FAILED.to_string();
    };

    let mut path = path;
    while let Some(outer) = path.strip_suffix(CLOSURE_SEGMENT) {
        path = outer.strip_suffix("::").unwrap_or(outer);
    }

    if path.is_empty() {
        CALLER_SYMBOL_MISSING.to_string()
    } else {
        path.to_string()
    }
}

/// Last `::` segment of a caller path. Sentinels pass through unchanged.
pub fn short_name(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of the function this macro is expanded in.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn __errstack_caller() {}
        $crate::caller::resolve($crate::caller::type_name_of(__errstack_caller))
    }};
}

/// Push the enclosing function's name, optionally followed by a formatted
/// message: `push_caller!(err)` or `push_caller!(err, "id {}", id)`.
#[macro_export]
macro_rules! push_caller {
    ($err:expr) => {
        $crate::push($err, $crate::caller_name!())
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::push(
            $err,
            ::std::format!("{}: {}", $crate::caller_name!(), ::std::format_args!($($arg)+)),
        )
    };
}

/// [`push_caller!`] with an explicit [`CallerStyle`].
#[macro_export]
macro_rules! push_caller_styled {
    ($style:expr, $err:expr) => {
        $crate::push($err, $crate::caller::CallerStyle::apply($style, $crate::caller_name!()))
    };
    ($style:expr, $err:expr, $($arg:tt)+) => {
        $crate::push(
            $err,
            ::std::format!(
                "{}: {}",
                $crate::caller::CallerStyle::apply($style, $crate::caller_name!()),
                ::std::format_args!($($arg)+),
            ),
        )
    };
}

/// [`push_caller!`] using the caller style of a
/// [`RenderConfig`](crate::RenderConfig): `push_caller_with!(&config, err)`.
#[macro_export]
macro_rules! push_caller_with {
    ($config:expr, $err:expr) => {
        $crate::push_caller_styled!($config.caller_style, $err)
    };
    ($config:expr, $err:expr, $($arg:tt)+) => {
        $crate::push_caller_styled!($config.caller_style, $err, $($arg)+)
    };
}
