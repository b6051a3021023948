//! Errors raised while loading or writing render configuration.
//!
//! Annotating an error never fails; this is the only fallible surface.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read render config '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid separator {separator:?}: must not contain a line break")]
    InvalidSeparator { separator: String },

    #[error("Invalid caller style '{value}': expected 'full' or 'short'")]
    InvalidCallerStyle { value: String },
}

/// Convenience type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
