//! Server-side client for the upstream catalog API.
//!
//! # Design
//! - Uses the caller's session token from the incoming request; never stores one.
//! - A 401 is returned as `ClientError::Unauthorized` with no side effects; the
//!   browser client owns session teardown.
//! - No response caching: every render asks the upstream.

use std::time::Duration;

use pokedex_api_models::{ListQuery, PokemonDetail, PokemonListResponse};
use pokedex_core::error::{ClientError, ClientResult, classify_failure};
use pokedex_core::paths::{detail_path, list_path};
use pokedex_telemetry::{Metrics, UpstreamOutcome};
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{GateError, GateResult};

const ENDPOINT_LIST: &str = "/pokemons";
const ENDPOINT_DETAIL: &str = "/pokemons/{id}";

/// Thin `reqwest` wrapper bound to the upstream base URL.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base: String,
    metrics: Metrics,
}

impl UpstreamClient {
    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(base: &Url, timeout: Duration, metrics: Metrics) -> GateResult<Self> {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        defaults.insert(ACCEPT, HeaderValue::from_static("application/json"));
        defaults.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let http = Client::builder()
            .timeout(timeout)
            .default_headers(defaults)
            .build()
            .map_err(|source| GateError::HttpClient { source })?;
        Ok(Self {
            http,
            base: base.as_str().trim_end_matches('/').to_string(),
            metrics,
        })
    }

    /// Fetch one page of the list.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] for non-2xx responses or transport failures.
    pub async fn list(
        &self,
        query: &ListQuery,
        token: Option<&str>,
    ) -> ClientResult<PokemonListResponse> {
        self.get_json(&list_path(query), ENDPOINT_LIST, token).await
    }

    /// Fetch a single record.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] for non-2xx responses or transport failures.
    pub async fn detail(&self, id: u32, token: Option<&str>) -> ClientResult<PokemonDetail> {
        self.get_json(&detail_path(id), ENDPOINT_DETAIL, token).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        endpoint: &'static str,
        token: Option<&str>,
    ) -> ClientResult<T> {
        let url = format!("{}{path}", self.base);
        let mut request = self.http.get(&url);
        if let Some(token) = token.filter(|value| !value.is_empty()) {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.metrics.inc_upstream(endpoint, UpstreamOutcome::Transport);
                return Err(ClientError::transport(err));
            }
        };

        let status = response.status();
        debug!(%url, status = status.as_u16(), "upstream response");
        if !status.is_success() {
            let outcome = if status == StatusCode::UNAUTHORIZED {
                UpstreamOutcome::Unauthorized
            } else {
                UpstreamOutcome::Failed
            };
            self.metrics.inc_upstream(endpoint, outcome);
            let body = response.bytes().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        match response.json::<T>().await {
            Ok(value) => {
                self.metrics.inc_upstream(endpoint, UpstreamOutcome::Ok);
                Ok(value)
            }
            Err(err) => {
                self.metrics.inc_upstream(endpoint, UpstreamOutcome::Transport);
                Err(ClientError::transport(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> Result<UpstreamClient> {
        let base = Url::parse(&server.base_url())?;
        Ok(UpstreamClient::new(
            &base,
            Duration::from_secs(2),
            Metrics::new()?,
        )?)
    }

    #[tokio::test]
    async fn list_sends_bearer_and_query() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/pokemons")
                .query_param("offset", "20")
                .query_param("limit", "20")
                .query_param("search", "char")
                .header("authorization", "Bearer tok");
            then.status(200).json_body(json!({
                "count": 3,
                "next": null,
                "previous": "http://api/pokemons?offset=0&limit=20",
                "results": [{"id": 4, "name": "charmander", "image": null}]
            }));
        });

        let list = client(&server)?
            .list(&ListQuery::page(20, Some("char".into())), Some("tok"))
            .await?;
        mock.assert();
        assert_eq!(list.count, 3);
        assert!(list.has_previous());
        assert_eq!(list.results[0].name, "charmander");
        Ok(())
    }

    #[tokio::test]
    async fn unauthorized_is_classified_without_side_effects() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/pokemons/1");
            then.status(401)
                .json_body(json!({"error": "Invalid token", "statusCode": 401}));
        });

        let err = client(&server)?.detail(1, Some("stale")).await;
        assert_eq!(
            err,
            Err(ClientError::Unauthorized {
                message: "Invalid token".into()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn server_errors_fall_back_to_status_text() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/pokemons/9");
            then.status(502).body("bad gateway");
        });

        let err = client(&server)?.detail(9, None).await;
        assert_eq!(
            err,
            Err(ClientError::Network {
                status: 502,
                message: "API Error: 502".into()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_body_is_a_transport_failure() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/pokemons/2");
            then.status(200).body("not json");
        });

        let err = client(&server)?.detail(2, None).await;
        assert!(matches!(err, Err(ClientError::Transport { .. })));
        Ok(())
    }
}
