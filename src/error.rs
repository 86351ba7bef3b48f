//! Configuration error types.
//!
//! The simulation itself never fails: every runtime condition is either a
//! success or a silent no-op. Loading and validating [`crate::Settings`] is the
//! only fallible surface, and callers fall back to defaults on error.

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading or validating settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::Settings`].
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A field holds a value the game cannot run with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read settings '{}': {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse settings '{}': {}", path.display(), source)
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;
