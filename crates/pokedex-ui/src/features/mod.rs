//! Feature slices: authentication and the catalog views.
pub mod auth;
pub mod pokemon;
