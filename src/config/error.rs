//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Token limit must be at least one.
    #[error("invalid {name} '{value}': must be greater than zero")]
    InvalidTokenLimit { name: &'static str, value: String },

    /// Token limit string could not be parsed as a number.
    #[error("failed to parse {name} '{value}': {source}")]
    TokenLimitParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
