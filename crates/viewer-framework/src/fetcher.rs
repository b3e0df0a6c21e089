//! # Fetcher Trait
//!
//! The `Fetcher` trait is the seam between the aggregators and whatever
//! actually retrieves a document (an HTTP client, a file reader, a mock).
//! The aggregators treat it as opaque: they hand it a key and wait for the
//! future to settle.
//!
//! Every transport or parse problem must come back as `Err(FetchError)`.
//! A panic inside `fetch` is treated as a defect of the fetcher itself and
//! fails the whole aggregation.

use crate::error::FetchError;
use crate::key::ResourceKey;
use async_trait::async_trait;
use std::future::Future;

/// Retrieves and parses one document given its key.
///
/// # Example
///
/// ```rust
/// use viewer_framework::{Fetcher, FetchError, ResourceKey};
/// use async_trait::async_trait;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Fetcher for Echo {
///     type Document = String;
///
///     async fn fetch(&self, key: &ResourceKey) -> Result<String, FetchError> {
///         Ok(key.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// The parsed document produced by a successful fetch.
    type Document: Send + 'static;

    async fn fetch(&self, key: &ResourceKey) -> Result<Self::Document, FetchError>;
}

/// Adapter turning an async closure into a [`Fetcher`]. Built by [`from_fn`].
#[derive(Clone)]
pub struct FnFetcher<F> {
    func: F,
}

/// Wraps `func` so it can be passed wherever a [`Fetcher`] is expected.
///
/// ```rust
/// use viewer_framework::{aggregate, from_fn, FetchError, ResourceKey, ResourceSet};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fetcher = from_fn(|key: ResourceKey| async move {
///     Ok::<_, FetchError>(key.as_str().len())
/// });
/// let keys = ResourceSet::new(["a", "bb"]).unwrap();
/// let results = aggregate(&keys, &fetcher).await.unwrap();
/// assert_eq!(results.get("bb"), Some(&2));
/// # }
/// ```
pub fn from_fn<F, Fut, D>(func: F) -> FnFetcher<F>
where
    F: Fn(ResourceKey) -> Fut + Send + Sync,
    Fut: Future<Output = Result<D, FetchError>> + Send,
    D: Send + 'static,
{
    FnFetcher { func }
}

#[async_trait]
impl<F, Fut, D> Fetcher for FnFetcher<F>
where
    F: Fn(ResourceKey) -> Fut + Send + Sync,
    Fut: Future<Output = Result<D, FetchError>> + Send,
    D: Send + 'static,
{
    type Document = D;

    async fn fetch(&self, key: &ResourceKey) -> Result<D, FetchError> {
        (self.func)(key.clone()).await
    }
}
