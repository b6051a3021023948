//! Common test utilities and helpers
//!
//! Typed root errors and a layered call chain shared by the integration tests.

#![allow(dead_code)]

use errstack::{push, pushf, ErrorStack, ResultExt};
use std::io;
use std::path::PathBuf;
use std::sync::Once;
use thiserror::Error;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Root failures a storage layer can report.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("permission denied")]
    PermissionDenied,
}

pub fn open_object(path: &str) -> Result<Vec<u8>, StorageError> {
    Err(StorageError::FileNotFound {
        path: PathBuf::from(path),
    })
}

pub fn create_object(path: &str) -> Result<Vec<u8>, ErrorStack> {
    open_object(path).annotate("create_object")
}

pub fn fetch_object(path: &str, attempt: u32) -> Result<Vec<u8>, ErrorStack> {
    create_object(path).map_err(|e| pushf!(e, "fetch_object attempt {}", attempt))
}

pub fn use_object(path: &str) -> Result<usize, ErrorStack> {
    let bytes = fetch_object(path, 1).annotate("use_object")?;
    Ok(bytes.len())
}

/// An io root with `kind`, annotated with each of `messages` in order.
pub fn io_stack(kind: io::ErrorKind, root: &str, messages: &[&str]) -> ErrorStack {
    let mut stack = ErrorStack::new(io::Error::new(kind, root.to_string()));
    for message in messages {
        stack = push(stack, *message);
    }
    stack
}
