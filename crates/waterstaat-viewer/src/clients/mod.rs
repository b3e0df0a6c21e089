//! # Clients
//!
//! Typed entry points for the rest of the application:
//!
//! - [`HttpFetcher`]: one GET per resource key, JSON body as document
//! - [`ManifestClient`]: loads the metadata, annotation and manifest sets
//! - [`ViewerClient`], [`TimelineClient`]: domain wrappers around the store
//!   clients, hiding the mutation enums

pub mod http_fetcher;
pub mod manifest_client;
pub mod timeline_client;
pub mod viewer_client;

pub use http_fetcher::*;
pub use manifest_client::*;
pub use timeline_client::*;
pub use viewer_client::*;
