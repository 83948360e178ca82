//! Core, DOM-free primitives and helpers for the browser UI.
pub mod boot;
pub mod cache;
pub mod preferences;
pub mod store;
