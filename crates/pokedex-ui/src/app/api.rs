//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot, from the boot settings.

use std::rc::Rc;

use pokedex_api_models::ClientSettings;

use crate::services::api::ApiClient;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(settings: &ClientSettings) -> Self {
        Self {
            client: Rc::new(ApiClient::new(settings)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
