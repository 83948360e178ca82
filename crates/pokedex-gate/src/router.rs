//! Router construction and server host.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    handler::Handler,
    http::{Method, Request, header::CONTENT_TYPE},
    middleware,
    routing::get,
};
use pokedex_telemetry::build_sha;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{Span, info};

use crate::error::{GateError, GateResult};
use crate::guard::route_guard;
use crate::health::{health, metrics};
use crate::pages::{detail_page, list_page, login_page, not_found_page, root};
use crate::state::GateState;
use crate::telemetry::HttpMetricsLayer;

const HEADER_REQUEST_ID: &str = "x-request-id";

/// axum router wrapper hosting the catalog pages.
pub struct GateServer {
    router: Router,
}

impl GateServer {
    /// Build the router with guard, tracing, request-id and metrics layers.
    #[must_use]
    pub fn new(state: GateState) -> Self {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);

        let assets = ServeDir::new(&state.assets_dir)
            .not_found_service(not_found_page.with_state(state.clone()));

        let router = Router::new()
            .route("/", get(root))
            .route("/login", get(login_page))
            .route("/pokemon", get(list_page))
            .route("/pokemon/{id}", get(detail_page))
            .route("/health", get(health))
            .route("/metrics", get(metrics))
            .fallback_service(assets)
            .layer(middleware::from_fn_with_state(state.clone(), route_guard))
            .layer(HttpMetricsLayer::new(state.metrics.clone()))
            .layer(cors_layer)
            .layer(
                ServiceBuilder::new()
                    .layer(pokedex_telemetry::set_request_id_layer())
                    .layer(pokedex_telemetry::propagate_request_id_layer())
                    .layer(trace_layer),
            )
            .with_state(state);

        Self { router }
    }

    /// Router handle for embedding or in-process testing.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind and serve until ctrl-c.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server loop fails.
    pub async fn serve(self, addr: SocketAddr) -> GateResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GateError::Bind { addr, source })?;
        info!(%addr, "gate server listening");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|source| GateError::Serve { source })
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::Body;
    use axum::http::{StatusCode, header::COOKIE, header::LOCATION};
    use pokedex_api_models::ClientSettings;
    use pokedex_telemetry::{Metrics, RedirectReason};
    use tower::ServiceExt;
    use url::Url;

    use crate::shell::Shell;
    use crate::upstream::UpstreamClient;

    fn state() -> Result<GateState> {
        let metrics = Metrics::new()?;
        // Unroutable upstream; prefetches fail fast and degrade to no initial data.
        let upstream = UpstreamClient::new(
            &Url::parse("http://127.0.0.1:9")?,
            Duration::from_millis(200),
            metrics.clone(),
        )?;
        Ok(GateState::new(
            upstream,
            metrics,
            Shell::from_template("<html><head></head><body></body></html>"),
            ClientSettings {
                api_base_url: "http://public.api".into(),
                secure_cookies: false,
            },
            "/nonexistent/pokedex-dist".into(),
        ))
    }

    async fn send(
        router: Router,
        uri: &str,
        cookie: Option<&str>,
    ) -> Result<axum::response::Response> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        Ok(router.oneshot(request.body(Body::empty())?).await?)
    }

    fn location(response: &axum::response::Response) -> Option<&str> {
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    #[tokio::test]
    async fn anonymous_protected_request_redirects_to_login() -> Result<()> {
        let state = state()?;
        let metrics = state.metrics.clone();
        let router = GateServer::new(state).router();

        for uri in ["/pokemon", "/pokemon?page=3", "/pokemon/25"] {
            let response = send(router.clone(), uri, None).await?;
            assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
            assert_eq!(location(&response), Some("/login"));
        }
        assert_eq!(metrics.redirects(RedirectReason::Unauthenticated), 3);
        Ok(())
    }

    #[tokio::test]
    async fn authenticated_login_request_redirects_home() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let response = send(router, "/login", Some("auth-token=abc")).await?;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), Some("/pokemon"));
        Ok(())
    }

    #[tokio::test]
    async fn root_dispatches_by_session() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let anon = send(router.clone(), "/", None).await?;
        assert_eq!(location(&anon), Some("/login"));
        let authed = send(router, "/", Some("auth-token=abc")).await?;
        assert_eq!(location(&authed), Some("/pokemon"));
        assert_eq!(authed.status(), StatusCode::TEMPORARY_REDIRECT);
        Ok(())
    }

    #[tokio::test]
    async fn login_page_renders_shell_with_settings() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let response = send(router, "/login", None).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let html = String::from_utf8(bytes.to_vec())?;
        assert!(html.contains("id=\"pokedex-boot\""));
        assert!(html.contains("http://public.api"));
        assert!(html.contains("\"initial\":null"));
        Ok(())
    }

    #[tokio::test]
    async fn health_and_metrics_bypass_the_guard() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let health = send(router.clone(), "/health", None).await?;
        assert_eq!(health.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(health.into_body(), usize::MAX).await?;
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);

        let metrics = send(router, "/metrics", None).await?;
        assert_eq!(metrics.status(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_echoed() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let response = send(router, "/health", None).await?;
        assert!(response.headers().contains_key(HEADER_REQUEST_ID));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_paths_get_the_shell_with_404() -> Result<()> {
        let router = GateServer::new(state()?).router();
        let response = send(router, "/does-not-exist", None).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
