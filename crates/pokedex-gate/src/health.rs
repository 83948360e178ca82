//! Health and metrics endpoints.

use axum::{
    Json,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::GateHttpError;
use crate::state::GateState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub(crate) async fn metrics(State(state): State<GateState>) -> Result<Response, GateHttpError> {
    let body = state.metrics.render().map_err(|err| {
        error!(error = %err, "failed to render metrics");
        GateHttpError::internal("failed to render metrics")
    })?;
    Ok(([(CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response())
}
