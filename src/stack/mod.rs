//! The annotated error value and its rendering.
//!
//! An [`ErrorStack`] is a root error plus the ordered list of messages that
//! were pushed onto it while it travelled up the call chain. Messages are kept
//! oldest first; rendering walks them newest first and ends with the root.

pub mod cause;
pub mod push;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::config::RenderConfig;

pub use cause::{BoxError, Cause};

/// Separator used by `Display` and [`ErrorStack::error_text`].
pub const DEFAULT_SEPARATOR: &str = "|";

/// Common read surface of an annotated error.
pub trait ErrStack: fmt::Display {
    /// The original error.
    fn root(&self) -> &(dyn StdError + Send + Sync + 'static);

    /// Messages newest first, followed by the root's own text.
    fn ordered_trace(&self) -> Vec<String>;

    /// [`ordered_trace`](ErrStack::ordered_trace) joined with `sep`.
    fn join(&self, sep: &str) -> String {
        self.ordered_trace().join(sep)
    }
}

/// Where the root error lives. `anyhow::Error` does not implement
/// `std::error::Error`, so it is kept apart and inspected through anyhow's
/// own downcasting, which also sees through `.context(..)` layers.
#[derive(Clone)]
pub(crate) enum Root {
    Error(Arc<dyn StdError + Send + Sync + 'static>),
    Anyhow(Arc<AnyhowRoot>),
}

impl Root {
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            Root::Error(err) => &**err,
            Root::Anyhow(root) => &*root.0,
        }
    }
}

/// `std::error::Error` view of an anyhow root. Displays the outermost
/// message, like `anyhow::Error` itself.
pub(crate) struct AnyhowRoot(pub(crate) anyhow::Error);

impl fmt::Display for AnyhowRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for AnyhowRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl StdError for AnyhowRoot {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// A root error with the annotations added at each propagation point.
///
/// The value never changes after construction. [`ErrorStack::pushed`] and
/// [`push`](crate::push) build a new stack and leave existing ones alone.
/// Clones share the root through an `Arc`.
#[derive(Clone)]
pub struct ErrorStack {
    root: Root,
    messages: Vec<String>,
}

impl ErrorStack {
    /// Start a stack with no annotations.
    pub fn new<E>(root: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            root: Root::Error(Arc::new(root)),
            messages: Vec::new(),
        }
    }

    pub(crate) fn from_parts(root: Root, messages: Vec<String>) -> Self {
        Self { root, messages }
    }

    /// Push onto an `anyhow::Error`.
    ///
    /// An error that was converted from an `ErrorStack` continues that stack.
    /// Any other anyhow error becomes the root, and
    /// [`downcast_root`](ErrorStack::downcast_root) reaches the error it wraps.
    pub fn from_anyhow(err: anyhow::Error, message: impl Into<String>) -> Self {
        push::push(Cause::from_anyhow(err), message)
    }

    /// A new stack with `message` appended; `self` is left as it was.
    pub fn pushed(&self, message: impl Into<String>) -> Self {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend(self.messages.iter().cloned());
        messages.push(message.into());
        Self::from_parts(self.root.clone(), messages)
    }

    pub(crate) fn append(mut self, message: String) -> Self {
        self.messages.push(message);
        self
    }

    pub fn root(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.root.as_error()
    }

    /// Borrow the root as `T` if that is its concrete type.
    pub fn downcast_root<T>(&self) -> Option<&T>
    where
        T: StdError + Send + Sync + 'static,
    {
        match &self.root {
            Root::Error(err) => err.downcast_ref::<T>(),
            Root::Anyhow(root) => root.0.downcast_ref::<T>(),
        }
    }

    pub fn root_is<T>(&self) -> bool
    where
        T: StdError + Send + Sync + 'static,
    {
        match &self.root {
            Root::Error(err) => err.is::<T>(),
            Root::Anyhow(root) => root.0.is::<T>(),
        }
    }

    /// Give up the annotations and keep the root. An anyhow root comes back
    /// behind a wrapper with the same `Display` and `source`.
    pub fn into_root(self) -> Arc<dyn StdError + Send + Sync + 'static> {
        match self.root {
            Root::Error(err) => err,
            Root::Anyhow(root) => root as Arc<dyn StdError + Send + Sync + 'static>,
        }
    }

    /// Annotations in the order they were pushed.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of annotations.
    pub fn depth(&self) -> usize {
        self.messages.len()
    }

    pub fn ordered_trace(&self) -> Vec<String> {
        let mut trace = Vec::with_capacity(self.messages.len() + 1);
        trace.extend(self.messages.iter().rev().cloned());
        trace.push(self.root().to_string());
        trace
    }

    pub fn join(&self, sep: &str) -> String {
        self.ordered_trace().join(sep)
    }

    /// Same text as `Display`.
    pub fn error_text(&self) -> String {
        self.join(DEFAULT_SEPARATOR)
    }

    pub fn render(&self, config: &RenderConfig) -> String {
        self.join(&config.separator)
    }
}

impl ErrStack for ErrorStack {
    fn root(&self) -> &(dyn StdError + Send + Sync + 'static) {
        ErrorStack::root(self)
    }

    fn ordered_trace(&self) -> Vec<String> {
        ErrorStack::ordered_trace(self)
    }

    fn join(&self, sep: &str) -> String {
        ErrorStack::join(self, sep)
    }
}

impl fmt::Display for ErrorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in self.messages.iter().rev() {
            write!(f, "{}{}", message, DEFAULT_SEPARATOR)?;
        }
        write!(f, "{}", self.root())
    }
}

impl fmt::Debug for ErrorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorStack")
            .field("root", &self.root())
            .field("messages", &self.messages)
            .finish()
    }
}

/// `std::error::Error` view of an [`ErrorStack`], produced when converting
/// into boxed or `anyhow` errors. Displays as the joined trace; its source is
/// the root. [`Cause`] unwraps it again so a round trip continues the stack.
pub(crate) struct StackedError(pub(crate) ErrorStack);

impl fmt::Display for StackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for StackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl StdError for StackedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.root())
    }
}

impl From<ErrorStack> for BoxError {
    fn from(stack: ErrorStack) -> Self {
        Box::new(StackedError(stack))
    }
}

impl From<ErrorStack> for anyhow::Error {
    fn from(stack: ErrorStack) -> Self {
        anyhow::Error::new(StackedError(stack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn root_error() -> io::Error {
        io::Error::new(io::ErrorKind::Other, "root")
    }

    #[test]
    fn test_new_stack_renders_root_only() {
        let stack = ErrorStack::new(root_error());
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.ordered_trace(), vec!["root".to_string()]);
        assert_eq!(stack.to_string(), "root");
    }

    #[test]
    fn test_ordered_trace_is_newest_first() {
        let stack = ErrorStack::new(root_error())
            .pushed("first")
            .pushed("second")
            .pushed("third");
        assert_eq!(stack.ordered_trace(), vec!["third", "second", "first", "root"]);
        assert_eq!(stack.messages(), ["first", "second", "third"]);
    }

    #[test]
    fn test_display_matches_default_join() {
        let stack = ErrorStack::new(root_error()).pushed("a").pushed("b");
        assert_eq!(stack.to_string(), stack.join(DEFAULT_SEPARATOR));
        assert_eq!(stack.error_text(), "b|a|root");
    }

    #[test]
    fn test_join_with_custom_separator() {
        let stack = ErrorStack::new(root_error()).pushed("a").pushed("b");
        assert_eq!(stack.join(" <- "), "b <- a <- root");
        assert_eq!(stack.join(""), "baroot");
    }

    #[test]
    fn test_pushed_leaves_original_untouched() {
        let base = ErrorStack::new(root_error()).pushed("base");
        let left = base.pushed("left");
        let right = base.pushed("right");

        assert_eq!(base.to_string(), "base|root");
        assert_eq!(left.to_string(), "left|base|root");
        assert_eq!(right.to_string(), "right|base|root");
    }

    #[test]
    fn test_render_uses_config_separator() {
        let stack = ErrorStack::new(root_error()).pushed("ctx");
        let config = RenderConfig {
            separator: ": ".to_string(),
            ..RenderConfig::default()
        };
        assert_eq!(stack.render(&config), "ctx: root");
    }

    #[test]
    fn test_downcast_root() {
        let stack = ErrorStack::new(root_error()).pushed("ctx");
        assert!(stack.root_is::<io::Error>());
        let io_err = stack.downcast_root::<io::Error>().expect("io root");
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert!(stack.downcast_root::<std::fmt::Error>().is_none());
    }

    #[test]
    fn test_boxed_conversion_exposes_root_as_source() {
        let stack = ErrorStack::new(root_error()).pushed("ctx");
        let boxed: BoxError = stack.into();
        assert_eq!(boxed.to_string(), "ctx|root");
        let source = boxed.source().expect("source");
        assert_eq!(source.to_string(), "root");
    }

    #[test]
    fn test_trait_object_view() {
        let stack = ErrorStack::new(root_error()).pushed("ctx");
        let view: &dyn ErrStack = &stack;
        assert_eq!(view.join("/"), "ctx/root");
        assert_eq!(view.root().to_string(), "root");
    }
}
