//! Shared, immutable state handed to every handler.

use std::path::PathBuf;

use axum::http::{HeaderMap, header::COOKIE};
use pokedex_api_models::{BootPayload, ClientSettings, InitialData};
use pokedex_config::GateConfig;
use pokedex_core::session::token_from_cookies;
use pokedex_core::{AccessPolicy, SessionState};
use pokedex_telemetry::Metrics;

use crate::error::GateResult;
use crate::shell::Shell;
use crate::upstream::UpstreamClient;

/// Dependencies shared across handlers and middleware.
#[derive(Clone)]
pub struct GateState {
    pub(crate) policy: AccessPolicy,
    pub(crate) upstream: UpstreamClient,
    pub(crate) metrics: Metrics,
    pub(crate) shell: Shell,
    pub(crate) settings: ClientSettings,
    pub(crate) assets_dir: PathBuf,
}

impl GateState {
    /// Assemble state from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream client or the HTML shell cannot be prepared.
    pub fn from_config(config: &GateConfig, metrics: Metrics) -> GateResult<Self> {
        let upstream = UpstreamClient::new(
            &config.api_base_url,
            config.upstream_timeout,
            metrics.clone(),
        )?;
        let shell = Shell::load(&config.assets_dir)?;
        let settings = ClientSettings {
            api_base_url: config.public_api_base(),
            secure_cookies: config.secure_cookies(),
        };
        Ok(Self::new(
            upstream,
            metrics,
            shell,
            settings,
            config.assets_dir.clone(),
        ))
    }

    /// Assemble state from pre-built parts.
    #[must_use]
    pub const fn new(
        upstream: UpstreamClient,
        metrics: Metrics,
        shell: Shell,
        settings: ClientSettings,
        assets_dir: PathBuf,
    ) -> Self {
        Self {
            policy: AccessPolicy::DEFAULT,
            upstream,
            metrics,
            shell,
            settings,
            assets_dir,
        }
    }

    /// Metrics handle shared with the router.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(crate) fn boot(&self, initial: Option<InitialData>) -> BootPayload {
        BootPayload {
            config: self.settings.clone(),
            initial,
        }
    }
}

/// Session token carried by the request's `Cookie` header(s).
pub(crate) fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookies)
}

pub(crate) fn session_state(token: Option<&str>) -> SessionState {
    SessionState::from_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn token_is_read_from_any_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("auth-token=abc"));
        assert_eq!(session_token(&headers).as_deref(), Some("abc"));
        assert!(session_state(session_token(&headers).as_deref()).is_authenticated());
    }

    #[test]
    fn absent_cookie_is_anonymous() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);
        assert_eq!(session_state(None), SessionState::Anonymous);
    }
}
