//! # HTTP Fetcher
//!
//! [`HttpFetcher`] turns a [`ResourceKey`] into a URL through a
//! [`UrlTemplate`] and fetches it as JSON. Every failure becomes a
//! [`FetchError`], so a settle-all aggregation records it as absent.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;
use viewer_framework::{FetchError, Fetcher, ResourceKey};

const KEY_PLACEHOLDER: &str = "{key}";

/// A URL with a `{key}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Returns `None` if `template` has no `{key}` placeholder.
    pub fn parse(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        template.contains(KEY_PLACEHOLDER).then_some(Self(template))
    }

    /// `{base}/{path}`; `path` must carry the placeholder.
    pub(crate) fn from_parts(base: &str, path: &str) -> Self {
        debug_assert!(path.contains(KEY_PLACEHOLDER));
        Self(format!("{base}/{path}"))
    }

    /// The URL for `key`, with the key percent-encoded as one path segment.
    pub fn render(&self, key: &ResourceKey) -> String {
        self.0.replace(KEY_PLACEHOLDER, &urlencoding::encode(key.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the HTTP client shared by all fetchers.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Fetches JSON documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    template: UrlTemplate,
}

impl HttpFetcher {
    pub fn new(client: Client, template: UrlTemplate) -> Self {
        Self { client, template }
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    type Document = Value;

    async fn fetch(&self, key: &ResourceKey) -> Result<Value, FetchError> {
        let url = self.template.render(key);
        debug!(%key, %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
