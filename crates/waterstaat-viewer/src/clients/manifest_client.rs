//! # Manifest Client
//!
//! Loads the three document sets the viewer starts from. Metadata is
//! aggregated settle-all: a missing edition only hides its layer. Annotation
//! pages and manifests are all-or-nothing, since a partial set cannot be
//! rendered.

use super::http_fetcher::{build_http_client, HttpFetcher};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::model::EditionCatalog;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use viewer_framework::{aggregate, aggregate_all, AggregateError, Fetcher, ResultMap};

/// A shared fetcher producing JSON documents.
pub type JsonFetcher = Arc<dyn Fetcher<Document = Value>>;

#[derive(Clone)]
pub struct ManifestClient {
    catalog: EditionCatalog,
    metadata: JsonFetcher,
    annotations: JsonFetcher,
    manifests: JsonFetcher,
}

impl ManifestClient {
    pub fn new(
        catalog: EditionCatalog,
        metadata: JsonFetcher,
        annotations: JsonFetcher,
        manifests: JsonFetcher,
    ) -> Self {
        Self {
            catalog,
            metadata,
            annotations,
            manifests,
        }
    }

    /// HTTP fetchers for the URLs of `config`, sharing one connection pool.
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ViewerError> {
        let catalog = EditionCatalog::new(config.metadata_editions.iter().map(String::as_str))?;
        let client = build_http_client(config.request_timeout)
            .map_err(|e| ViewerError::Http(e.to_string()))?;

        Ok(Self::new(
            catalog,
            Arc::new(HttpFetcher::new(client.clone(), config.metadata_url.clone())),
            Arc::new(HttpFetcher::new(client.clone(), config.annotation_url.clone())),
            Arc::new(HttpFetcher::new(client, config.manifest_url.clone())),
        ))
    }

    pub fn catalog(&self) -> &EditionCatalog {
        &self.catalog
    }

    /// Metadata per edition. Failed editions are present with no document.
    #[instrument(skip(self))]
    pub async fn load_metadata(&self) -> Result<ResultMap<Value>, AggregateError> {
        aggregate(self.catalog.metadata(), self.metadata.as_ref()).await
    }

    /// Annotation pages in edition order, or the first failure.
    #[instrument(skip(self))]
    pub async fn load_annotations(&self) -> Result<Vec<Value>, AggregateError> {
        aggregate_all(self.catalog.annotations(), self.annotations.as_ref()).await
    }

    /// IIIF manifests in sheet order, or the first failure.
    #[instrument(skip(self))]
    pub async fn load_manifests(&self) -> Result<Vec<Value>, AggregateError> {
        aggregate_all(self.catalog.manifests(), self.manifests.as_ref()).await
    }
}
