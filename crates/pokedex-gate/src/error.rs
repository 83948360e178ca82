//! Error types for the gate server.
//!
//! # Design
//! - `GateError` covers startup and serving failures with constant messages.
//! - `GateHttpError` renders the `{error, statusCode}` envelope the upstream uses.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pokedex_api_models::ErrorBody;
use thiserror::Error;

/// Result alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Startup and serving failures.
#[derive(Debug, Error)]
pub enum GateError {
    /// The upstream HTTP client could not be constructed.
    #[error("failed to build upstream http client")]
    HttpClient {
        /// Source client error.
        source: reqwest::Error,
    },
    /// The HTML shell could not be read from the assets directory.
    #[error("failed to read html shell")]
    ShellRead {
        /// Path that was read.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The listener could not bind.
    #[error("failed to bind listener")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Source IO error.
        source: io::Error,
    },
    /// The server loop exited with an error.
    #[error("server loop failed")]
    Serve {
        /// Source IO error.
        source: io::Error,
    },
}

/// Error rendered to HTTP callers as `{error, statusCode}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateHttpError {
    status: StatusCode,
    message: String,
}

impl GateHttpError {
    /// Build an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 500 with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Status code carried by the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for GateHttpError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            status_code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn http_error_renders_upstream_envelope() -> Result<()> {
        let response = GateHttpError::internal("metrics unavailable").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: ErrorBody = serde_json::from_slice(&bytes)?;
        assert_eq!(body.error, "metrics unavailable");
        assert_eq!(body.status_code, 500);
        Ok(())
    }
}
