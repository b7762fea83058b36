//! Error types for gendercite.
//!
//! Library crates use [`GenderciteError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all gendercite operations.
#[derive(Debug, thiserror::Error)]
pub enum GenderciteError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error during a citation, author, or gender lookup.
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected response body from an external service.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Cache or results-table persistence error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GenderciteError>;

impl GenderciteError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a decode error from any displayable message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = GenderciteError::config("missing seed table");
        assert_eq!(err.to_string(), "config error: missing seed table");

        let err = GenderciteError::Network("opencitations unreachable".into());
        assert!(err.to_string().contains("opencitations unreachable"));
    }
}
