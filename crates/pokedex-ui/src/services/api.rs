//! HTTP client for the upstream REST API (browser side).
//!
//! # Design
//! - The token is read from `document.cookie` on every call; no copy is cached.
//! - Failures are classified by `pokedex_core::error` and the session side effect
//!   (clear cookie, hard navigation to login) is applied here, once, for every caller.

use gloo::console;
use gloo::utils::window;
use gloo_net::http::{Request, Response};
use pokedex_api_models::{
    ClientSettings, ListQuery, LoginRequest, LoginResponse, PokemonDetail, PokemonListResponse,
};
use pokedex_core::error::{LOGIN_ENDPOINT, classify_failure, failure_effect};
use pokedex_core::paths::{detail_path, list_path};
use pokedex_core::{AccessPolicy, ClientError, ClientResult, FailureEffect};
use serde::de::DeserializeOwned;
use yewdux::prelude::Dispatch;

use crate::core::store::AppStore;
use crate::features::auth::session;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    secure_cookies: bool,
}

impl ApiClient {
    pub(crate) fn new(settings: &ClientSettings) -> Self {
        Self {
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            secure_cookies: settings.secure_cookies,
        }
    }

    pub(crate) const fn secure_cookies(&self) -> bool {
        self.secure_cookies
    }

    pub(crate) async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        let request = Request::post(&self.url(LOGIN_ENDPOINT))
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(ClientError::transport)?;
        self.send(request, LOGIN_ENDPOINT).await
    }

    pub(crate) async fn list(&self, query: &ListQuery) -> ClientResult<PokemonListResponse> {
        let path = list_path(query);
        self.send(self.get(&path), &path).await
    }

    pub(crate) async fn detail(&self, id: u32) -> ClientResult<PokemonDetail> {
        let path = detail_path(id);
        self.send(self.get(&path), &path).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> Request {
        let mut request =
            Request::get(&self.url(path)).header("Content-Type", "application/json");
        if let Some(token) = session::read_token() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        request
    }

    async fn send<T: DeserializeOwned>(&self, request: Request, endpoint: &str) -> ClientResult<T> {
        let response = request.send().await.map_err(ClientError::transport)?;
        if response.ok() {
            return response.json::<T>().await.map_err(ClientError::transport);
        }
        let err = failure(response).await;
        self.apply_effect(&err, endpoint);
        Err(err)
    }

    fn apply_effect(&self, err: &ClientError, endpoint: &str) {
        match failure_effect(err, endpoint) {
            FailureEffect::None => {}
            FailureEffect::ClearSession => session::clear_token(self.secure_cookies),
            FailureEffect::ClearSessionAndRedirect => {
                console::warn!(format!("session rejected by {endpoint}; returning to login"));
                session::clear_token(self.secure_cookies);
                Dispatch::<AppStore>::new().reduce_mut(AppStore::clear_session);
                if window()
                    .location()
                    .set_href(AccessPolicy::DEFAULT.login_path)
                    .is_err()
                {
                    console::error!("failed to navigate to login");
                }
            }
        }
    }
}

async fn failure(response: Response) -> ClientError {
    let status = response.status();
    let body = response.binary().await.unwrap_or_default();
    classify_failure(status, &body)
}
