//! # Design
//!
//! - Centralize bootstrap errors behind one enum.
//! - Constant messages; the failing step is carried in `operation`.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: pokedex_config::ConfigError,
    },
    /// Telemetry could not be installed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: pokedex_telemetry::TelemetryError,
    },
    /// The gate server failed to start or stopped with an error.
    #[error("gate server operation failed")]
    Gate {
        /// Operation identifier.
        operation: &'static str,
        /// Source gate error.
        source: pokedex_gate::GateError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: pokedex_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: pokedex_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn gate(operation: &'static str, source: pokedex_gate::GateError) -> Self {
        Self::Gate { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn helpers_keep_operation_and_source() {
        let err = AppError::config(
            "config.from_env",
            pokedex_config::ConfigError::MissingEnv {
                name: "POKEDEX_API_URL",
            },
        );
        assert!(matches!(
            err,
            AppError::Config {
                operation: "config.from_env",
                ..
            }
        ));
        assert_eq!(err.to_string(), "configuration operation failed");
        assert!(err.source().is_some());

        let gate = AppError::gate(
            "gate.serve",
            pokedex_gate::GateError::Serve {
                source: std::io::Error::other("boom"),
            },
        );
        assert!(matches!(gate, AppError::Gate { .. }));
    }
}
