//! The shapes an error can take before it is annotated.

use std::error::Error as StdError;
use std::sync::Arc;

use super::{ErrorStack, StackedError};

/// Boxed root error type stored inside an [`ErrorStack`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Input to [`push`](crate::push): a plain error or an `anyhow::Error` that
/// becomes the root of a new stack, or an existing stack that receives one
/// more annotation.
///
/// Conversions exist from every `std::error::Error + Send + Sync + 'static`
/// value and from [`ErrorStack`]. `ErrorStack` does not implement
/// `std::error::Error`, which is what keeps the two conversions apart and
/// guarantees a stack is never stored as another stack's root.
#[derive(Debug)]
pub enum Cause {
    Plain(Arc<dyn StdError + Send + Sync + 'static>),
    Anyhow(anyhow::Error),
    Stacked(ErrorStack),
}

impl Cause {
    /// Wrap an already boxed error. A box produced from an [`ErrorStack`]
    /// yields that stack back.
    pub fn boxed(err: BoxError) -> Self {
        match err.downcast::<StackedError>() {
            Ok(stacked) => {
                let StackedError(stack) = *stacked;
                Cause::Stacked(stack)
            }
            Err(err) => Cause::Plain(Arc::from(err)),
        }
    }

    /// Keep an `anyhow::Error` as the root, so root downcasts go through
    /// anyhow and reach the error it wraps. An anyhow error produced from an
    /// [`ErrorStack`] yields that stack back.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        match err.downcast::<StackedError>() {
            Ok(StackedError(stack)) => Cause::Stacked(stack),
            Err(err) => Cause::Anyhow(err),
        }
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self, Cause::Stacked(_))
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Cause::Plain(Arc::new(err))
    }
}

impl From<ErrorStack> for Cause {
    fn from(stack: ErrorStack) -> Self {
        Cause::Stacked(stack)
    }
}
