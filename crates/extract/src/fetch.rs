//! HTML retrieval through public CORS relays.
//!
//! Browsers cannot fetch third-party operator sites directly, and this
//! service deliberately mirrors that posture: pages are retrieved via
//! public CORS relays, tried in a fixed order. Each relay response is
//! unwrapped from its envelope and screened by [`crate::content`]
//! before it counts as a success; a relay that answers 200 with a block
//! page is as failed as one that times out.

use std::time::Duration;

use async_trait::async_trait;

use crate::content::{self, Rejection};

/// Per-relay request timeout.
pub const RELAY_TIMEOUT_SECS: u64 = 15;

/// Relay endpoints, tried in order. The target URL is percent-encoded
/// and appended.
pub const RELAY_ENDPOINTS: &[&str] = &[
    "https://api.allorigins.win/get?url=",
    "https://corsproxy.io/?",
    "https://api.codetabs.com/v1/proxy?quest=",
];

/// How a single relay attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The relay returned usable page content.
    Accepted,
    /// Non-2xx status from the relay.
    HttpStatus(u16),
    /// The request failed before a response arrived.
    NetworkError(String),
    /// The relay answered, but the payload failed content screening.
    Rejected(String),
}

/// Record of one relay attempt, kept for debug reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayAttempt {
    /// The relay endpoint prefix that was tried.
    pub relay: &'static str,
    pub outcome: AttemptOutcome,
}

/// Result of walking the relay chain.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Validated page HTML from the first relay that produced any,
    /// `None` when every relay failed.
    pub html: Option<String>,
    /// One entry per relay tried, in order.
    pub attempts: Vec<RelayAttempt>,
}

/// Source of page HTML for the extraction pipeline.
///
/// The pipeline only depends on this trait, so tests drive it with
/// canned fetchers instead of live relays.
#[async_trait]
pub trait FetchHtml: Send + Sync {
    async fn fetch(&self, target: &str) -> FetchOutcome;
}

#[async_trait]
impl FetchHtml for Box<dyn FetchHtml> {
    async fn fetch(&self, target: &str) -> FetchOutcome {
        (**self).fetch(target).await
    }
}

/// Production fetcher that walks [`RELAY_ENDPOINTS`] in order and stops
/// at the first validated payload.
pub struct RelayFetcher {
    client: reqwest::Client,
}

impl RelayFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(RELAY_TIMEOUT_SECS))
            .build()
            // Builder only fails on TLS backend misconfiguration; fall
            // back to the default client rather than propagate.
            .unwrap_or_default();
        Self { client }
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling across
    /// subsystems). The caller owns the timeout configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn try_relay(&self, relay: &'static str, target: &str) -> (Option<String>, AttemptOutcome) {
        let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
        let request_url = format!("{relay}{encoded}");

        let response = match self.client.get(&request_url).send().await {
            Ok(response) => response,
            Err(err) => return (None, AttemptOutcome::NetworkError(err.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return (None, AttemptOutcome::HttpStatus(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return (None, AttemptOutcome::NetworkError(err.to_string())),
        };

        let html = unwrap_envelope(&body);
        match content::validate_content(&html) {
            Ok(()) => (Some(html), AttemptOutcome::Accepted),
            Err(rejection) => (None, AttemptOutcome::Rejected(rejection_label(&rejection))),
        }
    }
}

impl Default for RelayFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchHtml for RelayFetcher {
    async fn fetch(&self, target: &str) -> FetchOutcome {
        let mut attempts = Vec::with_capacity(RELAY_ENDPOINTS.len());

        for &relay in RELAY_ENDPOINTS {
            tracing::debug!(relay, target, "Trying CORS relay");
            let (html, outcome) = self.try_relay(relay, target).await;
            let accepted = html.is_some();
            attempts.push(RelayAttempt {
                relay,
                outcome: outcome.clone(),
            });

            if accepted {
                tracing::info!(relay, target, "Relay fetch succeeded");
                return FetchOutcome { html, attempts };
            }
            tracing::debug!(relay, outcome = ?outcome, "Relay attempt failed");
        }

        tracing::warn!(target, "All CORS relays exhausted");
        FetchOutcome {
            html: None,
            attempts,
        }
    }
}

/// Unwrap known relay envelopes.
///
/// allorigins wraps the page in `{"contents": "..."}`; some relays use
/// `{"data": "..."}`. Anything else is treated as the raw page.
fn unwrap_envelope(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(contents) = value.get("contents").and_then(|v| v.as_str()) {
            return contents.to_string();
        }
        if let Some(data) = value.get("data").and_then(|v| v.as_str()) {
            return data.to_string();
        }
    }
    body.to_string()
}

fn rejection_label(rejection: &Rejection) -> String {
    match rejection {
        Rejection::BlockPhrase(phrase) => format!("block phrase: {phrase}"),
        Rejection::AmbiguousBlock(phrases) => format!("block indicators: {}", phrases.join(", ")),
        Rejection::InsufficientContent => "insufficient content".to_string(),
    }
}
