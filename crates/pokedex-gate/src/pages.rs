//! Server-rendered page handlers.
//!
//! # Design
//! - Each page re-evaluates the access policy; the edge guard is not assumed.
//! - Prefetch failures degrade to `initial: null`; the browser refetches and owns
//!   session teardown on 401.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use pokedex_api_models::{InitialData, ListQuery};
use pokedex_core::paths::parse_page_param;
use pokedex_telemetry::RedirectReason;
use serde::Deserialize;
use tracing::warn;

use crate::guard::redirect_for;
use crate::state::{GateState, session_state, session_token};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageParams {
    page: Option<String>,
}

pub(crate) async fn root(State(state): State<GateState>, headers: HeaderMap) -> Response {
    let token = session_token(&headers);
    let target = state.policy.root_target(session_state(token.as_deref()));
    state.metrics.inc_redirect(RedirectReason::Root);
    Redirect::temporary(target).into_response()
}

pub(crate) async fn login_page(
    State(state): State<GateState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let token = session_token(&headers);
    if let Some(redirect) = enforce(&state, uri.path(), token.as_deref()) {
        return redirect;
    }
    render(&state, None)
}

pub(crate) async fn list_page(
    State(state): State<GateState>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<PageParams>,
) -> Response {
    let token = session_token(&headers);
    if let Some(redirect) = enforce(&state, uri.path(), token.as_deref()) {
        return redirect;
    }

    let page = parse_page_param(params.page.as_deref());
    let initial = if page == 1 && token.is_some() {
        match state
            .upstream
            .list(&ListQuery::page(0, None), token.as_deref())
            .await
        {
            Ok(list) => Some(InitialData::List(list)),
            Err(err) => {
                warn!(error = %err, detail = %err.user_message(), "list prefetch failed");
                None
            }
        }
    } else {
        None
    };
    render(&state, initial)
}

pub(crate) async fn detail_page(
    State(state): State<GateState>,
    headers: HeaderMap,
    uri: Uri,
    Path(raw_id): Path<String>,
) -> Response {
    let token = session_token(&headers);
    if let Some(redirect) = enforce(&state, uri.path(), token.as_deref()) {
        return redirect;
    }

    let initial = match raw_id.parse::<u32>() {
        Ok(id) => match state.upstream.detail(id, token.as_deref()).await {
            Ok(detail) => Some(InitialData::Detail(detail)),
            Err(err) => {
                warn!(id, error = %err, detail = %err.user_message(), "detail prefetch failed");
                None
            }
        },
        Err(_) => None,
    };
    render(&state, initial)
}

/// Shell for unknown paths; the browser router shows its not-found view.
pub(crate) async fn not_found_page(State(state): State<GateState>) -> Response {
    (StatusCode::NOT_FOUND, render(&state, None)).into_response()
}

fn enforce(state: &GateState, path: &str, token: Option<&str>) -> Option<Response> {
    let decision = state.policy.evaluate(path, session_state(token));
    redirect_for(state, decision)
}

fn render(state: &GateState, initial: Option<InitialData>) -> Response {
    Html(state.shell.render(&state.boot(initial))).into_response()
}
