//! Login form state, cookie session helpers and the login view.
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
