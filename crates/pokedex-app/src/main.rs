#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]

//! Binary entrypoint for the Pokedex gate server.

use pokedex_app::{AppResult, run_app};

/// Loads configuration, installs telemetry and serves until shutdown.
#[tokio::main]
async fn main() -> AppResult<()> {
    run_app().await
}
