//! Server-render prefetch against a mocked upstream.

use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::COOKIE};
use httpmock::MockServer;
use httpmock::prelude::*;
use pokedex_api_models::{BootPayload, ClientSettings, InitialData};
use pokedex_gate::{GateServer, GateState, Shell, UpstreamClient};
use pokedex_telemetry::Metrics;
use serde_json::json;
use tower::ServiceExt;
use url::Url;

fn router(server: &MockServer) -> Result<axum::Router> {
    let metrics = Metrics::new()?;
    let upstream = UpstreamClient::new(
        &Url::parse(&server.base_url())?,
        Duration::from_secs(2),
        metrics.clone(),
    )?;
    let state = GateState::new(
        upstream,
        metrics,
        Shell::from_template("<html><head></head><body><div id=\"root\"></div></body></html>"),
        ClientSettings {
            api_base_url: server.base_url(),
            secure_cookies: true,
        },
        "/nonexistent/pokedex-dist".into(),
    );
    Ok(GateServer::new(state).router())
}

async fn boot_payload(router: axum::Router, uri: &str) -> Result<BootPayload> {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, "auth-token=tok")
        .body(Body::empty())?;
    let response = router.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let html = String::from_utf8(bytes.to_vec())?;
    let marker = "type=\"application/json\">";
    let start = html
        .find(marker)
        .map(|index| index + marker.len())
        .ok_or_else(|| anyhow::anyhow!("boot payload missing"))?;
    let end = html[start..]
        .find("</script>")
        .map(|index| start + index)
        .ok_or_else(|| anyhow::anyhow!("boot payload not closed"))?;
    Ok(serde_json::from_str(&html[start..end])?)
}

#[tokio::test]
async fn first_page_is_prefetched_with_the_session_token() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/pokemons")
            .query_param("offset", "0")
            .query_param("limit", "20")
            .header("authorization", "Bearer tok");
        then.status(200).json_body(json!({
            "count": 100,
            "next": "http://api/pokemons?offset=20&limit=20",
            "previous": null,
            "results": [
                {"id": 1, "name": "bulbasaur", "image": null},
                {"id": 2, "name": "ivysaur", "image": null},
                {"id": 3, "name": "venusaur", "image": null}
            ]
        }));
    });

    let payload = boot_payload(router(&server)?, "/pokemon").await?;
    mock.assert();
    assert!(payload.config.secure_cookies);
    match payload.initial {
        Some(InitialData::List(list)) => {
            assert_eq!(list.count, 100);
            assert_eq!(list.results.len(), 3);
        }
        other => anyhow::bail!("unexpected initial data: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn later_pages_skip_the_prefetch() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET).path("/pokemons");
        then.status(200);
    });

    let payload = boot_payload(router(&server)?, "/pokemon?page=2").await?;
    assert_eq!(mock.hits(), 0);
    assert!(payload.initial.is_none());
    Ok(())
}

#[tokio::test]
async fn detail_page_prefetches_the_record() -> Result<()> {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/pokemons/25");
        then.status(200).json_body(json!({
            "id": 25,
            "name": "pikachu",
            "image": null,
            "abilities": [{"name": "static", "isHidden": false}],
            "moves": [],
            "forms": [{"name": "pikachu"}]
        }));
    });

    let payload = boot_payload(router(&server)?, "/pokemon/25?page=2").await?;
    assert!(matches!(
        payload.initial,
        Some(InitialData::Detail(ref detail)) if detail.name == "pikachu"
    ));
    Ok(())
}

#[tokio::test]
async fn rejected_prefetch_renders_without_initial_data() -> Result<()> {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/pokemons/7");
        then.status(401)
            .json_body(json!({"error": "Unauthorized", "statusCode": 401}));
    });

    let payload = boot_payload(router(&server)?, "/pokemon/7").await?;
    assert!(payload.initial.is_none());
    Ok(())
}
