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
//! DOM-free primitives shared by the gate server and the browser UI.
//!
//! Layout: `access.rs` (route access policy evaluated at every enforcement point),
//! `session.rs` (session cookie policy and parsing), `error.rs` (client error
//! taxonomy and response classification), `paths.rs` (upstream and page URL builders).

pub mod access;
pub mod error;
pub mod paths;
pub mod session;

pub use access::{AccessDecision, AccessPolicy, SessionState};
pub use error::{ClientError, ClientResult, FailureEffect, INVALID_CREDENTIALS_MESSAGE};
pub use session::{SESSION_COOKIE, SESSION_TTL_SECS};
