//! Assemble [`GateConfig`] from environment variables.
//!
//! # Design
//! - `from_lookup` takes a lookup closure so tests never touch process state.
//! - Blank values are treated as unset.

use std::path::PathBuf;

use crate::defaults::{
    DEFAULT_ASSETS_DIR, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    ENV_API_URL, ENV_ASSETS_DIR, ENV_BIND_ADDR, ENV_DEPLOYMENT, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    ENV_PUBLIC_API_URL, ENV_UPSTREAM_TIMEOUT,
};
use crate::error::{ConfigError, ConfigResult};
use crate::model::{DeploymentEnv, GateConfig, LogFormatSetting};
use crate::validate::{
    parse_base_url, parse_bind_addr, parse_environment, parse_log_format, parse_timeout,
};

impl GateConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value is invalid.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_raw = get(ENV_API_URL).ok_or(ConfigError::MissingEnv { name: ENV_API_URL })?;
        let api_base_url = parse_base_url(ENV_API_URL, &api_raw)?;
        let public_api_base_url = match get(ENV_PUBLIC_API_URL) {
            Some(raw) => parse_base_url(ENV_PUBLIC_API_URL, &raw)?,
            None => api_base_url.clone(),
        };

        let bind_addr = parse_bind_addr(
            ENV_BIND_ADDR,
            &get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;
        let environment = get(ENV_DEPLOYMENT)
            .map(|raw| parse_environment(ENV_DEPLOYMENT, &raw))
            .transpose()?
            .unwrap_or(DeploymentEnv::Development);
        let log_format = get(ENV_LOG_FORMAT)
            .map(|raw| parse_log_format(ENV_LOG_FORMAT, &raw))
            .transpose()?
            .unwrap_or(LogFormatSetting::Inferred);
        let upstream_timeout = match get(ENV_UPSTREAM_TIMEOUT) {
            Some(raw) => parse_timeout(ENV_UPSTREAM_TIMEOUT, &raw)?,
            None => std::time::Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            api_base_url,
            public_api_base_url,
            environment,
            assets_dir: PathBuf::from(
                get(ENV_ASSETS_DIR).unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
            ),
            log_level: get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            upstream_timeout,
        })
    }
}
