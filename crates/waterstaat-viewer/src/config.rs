//! Viewer configuration.
//!
//! All settings come from `VIEWER_*` environment variables. Unset, metadata
//! and manifests are read from a local development server
//! (`http://localhost:5173`) and annotation pages from the published
//! annotation repository on GitHub.

use crate::clients::UrlTemplate;
use crate::error::ConfigError;
use crate::model::metadata_editions;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";
/// Annotation pages are published per edition under this directory.
pub const ANNOTATION_BASE_URL: &str =
    "https://raw.githubusercontent.com/bmmeijers/iiif-annotations/refs/heads/develop/series/waterstaatskaart/uu";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_STORE_BUFFER: usize = 32;

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// `{base}/metadata-{key}.json`.
    pub metadata_url: UrlTemplate,
    /// Annotation page per annotated edition.
    pub annotation_url: UrlTemplate,
    /// `{base}/iiif-manifests/{key}`.
    pub manifest_url: UrlTemplate,
    /// Metadata editions to load, in fetch order.
    pub metadata_editions: Vec<String>,
    /// Per-request timeout of the HTTP client.
    pub request_timeout: Duration,
    /// Channel capacity of each state store.
    pub store_buffer: usize,
}

impl ViewerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `VIEWER_METADATA_BASE_URL` -- site serving `metadata-*.json` (default `http://localhost:5173`)
    /// - `VIEWER_METADATA_EDITIONS` -- comma-separated editions (default `editie-1,...,editie-5`)
    /// - `VIEWER_ANNOTATION_URL_TEMPLATE` -- URL with a `{key}` placeholder (default GitHub raw)
    /// - `VIEWER_MANIFEST_BASE_URL` -- site serving `iiif-manifests/` (default `http://localhost:5173`)
    /// - `VIEWER_REQUEST_TIMEOUT_MS` -- HTTP timeout in milliseconds (default 30000)
    /// - `VIEWER_STORE_BUFFER` -- store channel capacity (default 32)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables read from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let metadata_base = lookup("VIEWER_METADATA_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let manifest_base = lookup("VIEWER_MANIFEST_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let annotation_url = lookup("VIEWER_ANNOTATION_URL_TEMPLATE")
            .unwrap_or_else(|| format!("{ANNOTATION_BASE_URL}/{{key}}/latest.json"));
        let annotation_url = UrlTemplate::parse(annotation_url.clone()).ok_or_else(|| {
            ConfigError::InvalidTemplate {
                var: "VIEWER_ANNOTATION_URL_TEMPLATE".to_owned(),
                template: annotation_url,
            }
        })?;

        let metadata_editions = match lookup("VIEWER_METADATA_EDITIONS") {
            Some(raw) => parse_editions("VIEWER_METADATA_EDITIONS", &raw)?,
            None => metadata_editions(),
        };

        let request_timeout_ms = parse_positive(
            "VIEWER_REQUEST_TIMEOUT_MS",
            lookup("VIEWER_REQUEST_TIMEOUT_MS"),
            DEFAULT_REQUEST_TIMEOUT_MS,
        )?;
        let store_buffer = parse_positive(
            "VIEWER_STORE_BUFFER",
            lookup("VIEWER_STORE_BUFFER"),
            DEFAULT_STORE_BUFFER as u64,
        )?;

        Ok(Self {
            metadata_url: base_template(&metadata_base, "metadata-{key}.json"),
            annotation_url,
            manifest_url: base_template(&manifest_base, "iiif-manifests/{key}"),
            metadata_editions,
            request_timeout: Duration::from_millis(request_timeout_ms),
            store_buffer: store_buffer as usize,
        })
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            metadata_url: base_template(DEFAULT_BASE_URL, "metadata-{key}.json"),
            annotation_url: base_template(ANNOTATION_BASE_URL, "{key}/latest.json"),
            manifest_url: base_template(DEFAULT_BASE_URL, "iiif-manifests/{key}"),
            metadata_editions: metadata_editions(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            store_buffer: DEFAULT_STORE_BUFFER,
        }
    }
}

/// `{base}/{path}` with trailing slashes of `base` removed. `path` carries
/// the placeholder.
fn base_template(base: &str, path: &str) -> UrlTemplate {
    UrlTemplate::from_parts(base.trim_end_matches('/'), path)
}

fn parse_positive(var: &str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            var: var.to_owned(),
            value: raw,
        }),
    }
}

fn parse_editions(var: &str, raw: &str) -> Result<Vec<String>, ConfigError> {
    let editions: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if editions.is_empty() {
        return Err(ConfigError::InvalidEditions {
            var: var.to_owned(),
            reason: "no editions listed".to_owned(),
        });
    }
    Ok(editions)
}
