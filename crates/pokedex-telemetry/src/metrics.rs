//! Prometheus-backed metrics registry.
//!
//! # Design
//! - Collector registration stays private; callers get typed increment helpers.
//! - Label values come from small enums so cardinality stays bounded.

use std::sync::Arc;

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::{Result, TelemetryError};

/// Why the route guard or a page handler redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// Anonymous visitor on a protected path.
    Unauthenticated,
    /// Signed-in visitor on the login page.
    AlreadyAuthenticated,
    /// Root path dispatch.
    Root,
}

impl RedirectReason {
    const fn label(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::AlreadyAuthenticated => "already_authenticated",
            Self::Root => "root",
        }
    }
}

/// Result of an upstream call made by the server API client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamOutcome {
    /// 2xx response decoded successfully.
    Ok,
    /// Upstream answered 401.
    Unauthorized,
    /// Upstream answered another non-2xx status.
    Failed,
    /// No usable response.
    Transport,
}

impl UpstreamOutcome {
    const fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Unauthorized => "unauthorized",
            Self::Failed => "failed",
            Self::Transport => "transport",
        }
    }
}

/// Metrics registry shared across the gate server.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    gate_redirects_total: IntCounterVec,
    upstream_requests_total: IntCounterVec,
}

impl Metrics {
    /// Construct a registry with the standard collectors registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a collector cannot be built or registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let http_requests_total = register(
            &registry,
            "http_requests_total",
            "Total HTTP requests served",
            &["route", "code"],
        )?;
        let gate_redirects_total = register(
            &registry,
            "gate_redirects_total",
            "Redirects issued by the access gate",
            &["reason"],
        )?;
        let upstream_requests_total = register(
            &registry,
            "upstream_requests_total",
            "Requests sent to the upstream API",
            &["endpoint", "outcome"],
        )?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                gate_redirects_total,
                upstream_requests_total,
            }),
        })
    }

    /// Count a served request.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Count a gate redirect.
    pub fn inc_redirect(&self, reason: RedirectReason) {
        self.inner
            .gate_redirects_total
            .with_label_values(&[reason.label()])
            .inc();
    }

    /// Count an upstream call; `endpoint` should be a route template, not a raw path.
    pub fn inc_upstream(&self, endpoint: &str, outcome: UpstreamOutcome) {
        self.inner
            .upstream_requests_total
            .with_label_values(&[endpoint, outcome.label()])
            .inc();
    }

    /// Current value of the redirect counter for `reason`.
    #[must_use]
    pub fn redirects(&self, reason: RedirectReason) -> u64 {
        self.inner
            .gate_redirects_total
            .with_label_values(&[reason.label()])
            .get()
    }

    /// Render the registry in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the output is not valid UTF-8.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&families, &mut buffer)
            .map_err(|source| TelemetryError::MetricsEncode { source })?;
        String::from_utf8(buffer).map_err(|source| TelemetryError::MetricsUtf8 { source })
    }
}

fn register(
    registry: &Registry,
    name: &'static str,
    help: &str,
    labels: &[&str],
) -> Result<IntCounterVec> {
    let counter = IntCounterVec::new(Opts::new(name, help), labels)
        .map_err(|source| TelemetryError::MetricsRegister { name, source })?;
    registry
        .register(Box::new(counter.clone()))
        .map_err(|source| TelemetryError::MetricsRegister { name, source })?;
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn counters_render_with_labels() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/pokemon", 200);
        metrics.inc_redirect(RedirectReason::Unauthenticated);
        metrics.inc_redirect(RedirectReason::Unauthenticated);
        metrics.inc_upstream("/pokemons", UpstreamOutcome::Ok);

        assert_eq!(metrics.redirects(RedirectReason::Unauthenticated), 2);
        assert_eq!(metrics.redirects(RedirectReason::Root), 0);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total{code=\"200\",route=\"/pokemon\"} 1"));
        assert!(rendered.contains("gate_redirects_total{reason=\"unauthenticated\"} 2"));
        assert!(rendered.contains("upstream_requests_total"));
        Ok(())
    }

    #[test]
    fn clones_share_one_registry() -> Result<()> {
        let metrics = Metrics::new()?;
        let clone = metrics.clone();
        clone.inc_redirect(RedirectReason::Root);
        assert_eq!(metrics.redirects(RedirectReason::Root), 1);
        Ok(())
    }
}
