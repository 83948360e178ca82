//! Edge route guard.
//!
//! Runs before routing for every request. Only `/login` and the protected tree are
//! inspected; everything else (assets, health, metrics) passes through untouched.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use pokedex_core::AccessDecision;
use pokedex_telemetry::RedirectReason;
use tracing::info;

use crate::state::{GateState, session_state, session_token};

pub(crate) async fn route_guard(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if !state.policy.matches(&path) {
        return next.run(req).await;
    }

    let token = session_token(req.headers());
    let decision = state.policy.evaluate(&path, session_state(token.as_deref()));
    match redirect_for(&state, decision) {
        Some(response) => {
            info!(%path, ?decision, "edge guard redirect");
            response
        }
        None => next.run(req).await,
    }
}

/// 307 response for a non-allow decision, counted in metrics.
pub(crate) fn redirect_for(state: &GateState, decision: AccessDecision) -> Option<Response> {
    let location = state.policy.location(decision)?;
    let reason = match decision {
        AccessDecision::RedirectToHome => RedirectReason::AlreadyAuthenticated,
        AccessDecision::RedirectToLogin | AccessDecision::Allow => {
            RedirectReason::Unauthenticated
        }
    };
    state.metrics.inc_redirect(reason);
    Some(Redirect::temporary(location).into_response())
}
