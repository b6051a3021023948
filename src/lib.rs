//! Annotated errors that keep their root cause.
//!
//! Each layer that sees a failure pushes a short message onto it and returns
//! the result upward. The top-level handler prints the whole trail, newest
//! annotation first, or inspects the original error for programmatic
//! dispatch.
//!
//! ```
//! use std::io;
//! use errstack::{push, pushf};
//!
//! fn create_object() -> Result<(), errstack::ErrorStack> {
//!     let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
//!     Err(push(err, "create_object"))
//! }
//!
//! fn fetch_object(id: u32) -> Result<(), errstack::ErrorStack> {
//!     create_object().map_err(|e| pushf!(e, "fetch_object {}", id))
//! }
//!
//! let err = fetch_object(7).unwrap_err();
//! assert_eq!(err.to_string(), "fetch_object 7|create_object|no such file");
//! let root = err.downcast_root::<io::Error>().unwrap();
//! assert_eq!(root.kind(), io::ErrorKind::NotFound);
//! ```

pub mod caller;
pub mod config;
pub mod context;
pub mod errors;
pub mod stack;

// Re-export commonly used types for convenience
pub use caller::{CallerStyle, CALLER_LOOKUP_FAILED, CALLER_SYMBOL_MISSING};
pub use config::RenderConfig;
pub use context::ResultExt;
pub use errors::{ConfigError, ConfigResult};
pub use stack::push::{push, push_fmt};
pub use stack::{BoxError, Cause, ErrStack, ErrorStack, DEFAULT_SEPARATOR};
