//! Typed configuration for the gate server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use url::Url;

/// Deployment environment; production turns on `Secure` cookies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnv {
    /// Local or staging deployment.
    Development,
    /// Public deployment served over HTTPS.
    Production,
}

impl DeploymentEnv {
    /// Whether session cookies must carry the `Secure` attribute.
    #[must_use]
    pub const fn secure_cookies(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Explicit log format override; `Inferred` leaves the choice to telemetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    /// Let the build profile decide.
    Inferred,
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

/// Fully validated gate server configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GateConfig {
    /// Listen address.
    pub bind_addr: SocketAddr,
    /// Upstream base URL used by the server-side client.
    pub api_base_url: Url,
    /// Upstream base URL handed to the browser.
    pub public_api_base_url: Url,
    /// Deployment environment.
    pub environment: DeploymentEnv,
    /// Directory holding the built `index.html` and wasm bundle.
    pub assets_dir: PathBuf,
    /// Default log level.
    pub log_level: String,
    /// Log format override.
    pub log_format: LogFormatSetting,
    /// Timeout applied to every upstream request.
    #[serde(with = "duration_secs")]
    pub upstream_timeout: Duration,
}

impl GateConfig {
    /// Base URL string the browser should call, without a trailing slash.
    #[must_use]
    pub fn public_api_base(&self) -> String {
        self.public_api_base_url
            .as_str()
            .trim_end_matches('/')
            .to_string()
    }

    /// Whether cookies written for this deployment must be `Secure`.
    #[must_use]
    pub const fn secure_cookies(&self) -> bool {
        self.environment.secure_cookies()
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::Serializer;

    pub(super) fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }
}
