//! Catalog list and detail: reconciler state, sorting, data fetching, views.
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
