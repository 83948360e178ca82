//! Cookie-backed session for the browser.
//!
//! `document.cookie` is the only store; authentication is token presence.

use gloo::console;
use gloo::utils::document;
use pokedex_api_models::LoginResponse;
use pokedex_core::session::{clear_session_cookie, session_cookie, token_from_cookies};
use pokedex_core::{ClientResult, SessionState};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use yewdux::prelude::Dispatch;

use crate::core::store::AppStore;
use crate::features::auth::state::validate_credentials;
use crate::services::api::ApiClient;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

fn write_cookie(cookie: &str) {
    let written = html_document().is_some_and(|doc| doc.set_cookie(cookie).is_ok());
    if !written {
        console::error!("unable to write session cookie");
    }
}

pub(crate) fn read_token() -> Option<String> {
    let raw = html_document()?.cookie().ok()?;
    token_from_cookies(&raw)
}

pub(crate) fn session_state() -> SessionState {
    SessionState::from_token(read_token().as_deref())
}

pub(crate) fn is_authenticated() -> bool {
    session_state().is_authenticated()
}

pub(crate) fn store_token(token: &str, secure: bool) {
    write_cookie(&session_cookie(token, secure));
}

pub(crate) fn clear_token(secure: bool) {
    write_cookie(&clear_session_cookie(secure));
}

/// Validate, call the login endpoint and persist the returned token.
pub(crate) async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> ClientResult<LoginResponse> {
    let credentials = validate_credentials(username, password)?;
    let response = client.login(&credentials).await?;
    store_token(&response.token, client.secure_cookies());
    Ok(response)
}

/// Drop the token, cached data and preferences.
pub(crate) fn logout(secure: bool) {
    clear_token(secure);
    Dispatch::<AppStore>::new().reduce_mut(AppStore::clear_session);
}
