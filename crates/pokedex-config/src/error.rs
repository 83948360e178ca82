//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable was not set or was blank.
    #[error("missing required environment variable")]
    MissingEnv {
        /// Variable name.
        name: &'static str,
    },
    /// A variable held a value that failed validation.
    #[error("invalid configuration field")]
    InvalidField {
        /// Variable name.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
