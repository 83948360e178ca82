//! Presentation components driven by the store and feature views.
pub(crate) mod card;
pub(crate) mod grid;
pub(crate) mod layout;
pub(crate) mod not_found;
pub(crate) mod pagination;
pub(crate) mod search_input;
pub(crate) mod sort_popover;
