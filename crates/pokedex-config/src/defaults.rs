//! Variable names and fallback values.
//!
//! # Design
//! - Keep every recognised variable name in one place.

pub(crate) const ENV_BIND_ADDR: &str = "POKEDEX_BIND_ADDR";
pub(crate) const ENV_API_URL: &str = "POKEDEX_API_URL";
pub(crate) const ENV_PUBLIC_API_URL: &str = "POKEDEX_PUBLIC_API_URL";
pub(crate) const ENV_DEPLOYMENT: &str = "POKEDEX_ENV";
pub(crate) const ENV_ASSETS_DIR: &str = "POKEDEX_ASSETS_DIR";
pub(crate) const ENV_LOG_LEVEL: &str = "POKEDEX_LOG_LEVEL";
pub(crate) const ENV_LOG_FORMAT: &str = "POKEDEX_LOG_FORMAT";
pub(crate) const ENV_UPSTREAM_TIMEOUT: &str = "POKEDEX_UPSTREAM_TIMEOUT_SECS";

pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub(crate) const DEFAULT_ASSETS_DIR: &str = "dist";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
pub(crate) const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub(crate) const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 300;
