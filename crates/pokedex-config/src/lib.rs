#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Environment-driven configuration for the gate server.
//!
//! Layout: `model.rs` (typed configuration), `defaults.rs` (variable names and
//! fallback values), `validate.rs` (parsing helpers), `loader.rs` (`from_env` and
//! the lookup-based loader used by tests).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{DeploymentEnv, GateConfig, LogFormatSetting};
