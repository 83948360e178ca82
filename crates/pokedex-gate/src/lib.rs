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
//! axum host for the Pokedex catalog.
//!
//! Layout: `guard.rs` (edge route guard), `pages.rs` (server-rendered page
//! handlers), `shell.rs` (HTML shell + boot payload injection), `upstream.rs`
//! (server-side API client), `health.rs` (health and metrics endpoints),
//! `telemetry.rs` (request metrics layer), `router.rs` (`GateServer`).

pub mod error;
mod guard;
mod health;
mod pages;
pub mod router;
pub mod shell;
pub mod state;
mod telemetry;
pub mod upstream;

pub use error::{GateError, GateHttpError, GateResult};
pub use router::GateServer;
pub use shell::Shell;
pub use state::GateState;
pub use upstream::UpstreamClient;
