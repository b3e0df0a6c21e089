//! # Aggregators
//!
//! Two ways of fanning a [`ResourceSet`] out over a [`Fetcher`]:
//!
//! - [`aggregate`] settles every fetch and returns a best-effort
//!   [`ResultMap`]. A failing resource is logged and recorded as absent; it
//!   never cancels the others and never fails the call.
//! - [`aggregate_all`] is all-or-nothing: documents in key order, or the
//!   first rejection.
//!
//! Both issue every fetch before awaiting any of them. The fetches run as
//! concurrent futures on the calling task (no spawning), suspending at their
//! own I/O points, and the caller resumes only once the join completes.

use crate::error::AggregateError;
use crate::fetcher::Fetcher;
use crate::key::{ResourceKey, ResourceSet};
use crate::outcome::{FetchOutcome, ResultMap};
use futures::future::{join_all, try_join_all};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info, warn};

/// Fetches every key concurrently and waits for all of them to settle.
///
/// Successful documents are stored under their key. Each failure produces
/// one `error!` event carrying the key and cause, and the key is stored with
/// an absence marker (see [`ResultMap`]).
///
/// # Errors
///
/// Only [`AggregateError::FetcherPanicked`]: a fetcher that panics is a
/// defect rather than a resource problem. The remaining fetches still run
/// to completion before the error is returned.
///
/// # Example
///
/// ```rust
/// use viewer_framework::{aggregate, from_fn, FetchError, ResourceKey, ResourceSet};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fetcher = from_fn(|key: ResourceKey| async move {
///     match key.as_str() {
///         "b" => Err(FetchError::Transport("network error".into())),
///         other => Ok(other.to_uppercase()),
///     }
/// });
/// let keys = ResourceSet::new(["a", "b", "c"]).unwrap();
/// let results = aggregate(&keys, &fetcher).await.unwrap();
///
/// assert_eq!(results.get("a").map(String::as_str), Some("A"));
/// assert!(results.is_absent("b"));
/// assert_eq!(results.get("c").map(String::as_str), Some("C"));
/// # }
/// ```
pub async fn aggregate<F>(
    keys: &ResourceSet,
    fetcher: &F,
) -> Result<ResultMap<F::Document>, AggregateError>
where
    F: Fetcher + ?Sized,
{
    let mut results = ResultMap::new();
    if keys.is_empty() {
        debug!("No resources requested");
        return Ok(results);
    }

    let requested = keys.len();
    debug!(requested, "Issuing fetches");

    let pending = keys.iter().map(|key| async move {
        // The call itself is inside the guard: a fetcher may panic before
        // handing out its future.
        let settled = AssertUnwindSafe(async move { fetcher.fetch(key).await })
            .catch_unwind()
            .await;
        (key, settled)
    });
    let settled = join_all(pending).await;

    let mut panicked: Option<ResourceKey> = None;
    for (key, result) in settled {
        match result {
            Ok(outcome) => {
                let outcome = FetchOutcome::from(outcome);
                match &outcome {
                    FetchOutcome::Fulfilled(_) => debug!(%key, "Fetched"),
                    FetchOutcome::Rejected(e) => error!(%key, error = %e, "Fetch failed"),
                }
                results.record(key.clone(), outcome);
            }
            Err(_) => {
                error!(%key, "Fetcher panicked");
                panicked.get_or_insert_with(|| key.clone());
            }
        }
    }

    if let Some(key) = panicked {
        return Err(AggregateError::FetcherPanicked { key });
    }

    let fulfilled = results.fulfilled_count();
    let rejected = requested - fulfilled;
    if rejected > 0 {
        warn!(requested, fulfilled, rejected, "Aggregation settled with failures");
    } else {
        info!(requested, "Aggregation settled");
    }
    Ok(results)
}

/// Fetches every key concurrently and returns the documents in key order,
/// or the first failure.
///
/// Unlike [`aggregate`], outstanding fetches are dropped as soon as one
/// fails.
pub async fn aggregate_all<F>(
    keys: &ResourceSet,
    fetcher: &F,
) -> Result<Vec<F::Document>, AggregateError>
where
    F: Fetcher + ?Sized,
{
    if keys.is_empty() {
        debug!("No resources requested");
        return Ok(Vec::new());
    }

    let pending = keys.iter().map(|key| async move {
        match AssertUnwindSafe(async move { fetcher.fetch(key).await })
            .catch_unwind()
            .await
        {
            Ok(Ok(doc)) => Ok(doc),
            Ok(Err(source)) => {
                error!(%key, error = %source, "Fetch failed");
                Err(AggregateError::Rejected {
                    key: key.clone(),
                    source,
                })
            }
            Err(_) => {
                error!(%key, "Fetcher panicked");
                Err(AggregateError::FetcherPanicked { key: key.clone() })
            }
        }
    });

    let documents = try_join_all(pending).await?;
    info!(requested = documents.len(), "All resources fetched");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetcher::from_fn;

    #[tokio::test]
    async fn test_all_success() {
        let fetcher = from_fn(|key: ResourceKey| async move {
            Ok::<_, FetchError>(key.as_str().len())
        });
        let keys = ResourceSet::new(["a", "bb", "ccc"]).unwrap();

        let results = aggregate(&keys, &fetcher).await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results.get("a"), Some(&1));
        assert_eq!(results.get("bb"), Some(&2));
        assert_eq!(results.get("ccc"), Some(&3));
    }

    #[tokio::test]
    async fn test_all_failures_still_resolve() {
        let fetcher = from_fn(|_key: ResourceKey| async move {
            Err::<u8, _>(FetchError::Transport("offline".into()))
        });
        let keys = ResourceSet::new(["a", "b"]).unwrap();

        let results = aggregate(&keys, &fetcher).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.fulfilled_count(), 0);
        assert!(results.is_absent("a"));
        assert!(results.is_absent("b"));
    }

    #[tokio::test]
    async fn test_aggregate_all_keeps_key_order() {
        let fetcher = from_fn(|key: ResourceKey| async move {
            Ok::<_, FetchError>(key.to_string())
        });
        let keys = ResourceSet::new(["z", "y", "x"]).unwrap();

        let docs = aggregate_all(&keys, &fetcher).await.unwrap();

        assert_eq!(docs, vec!["z", "y", "x"]);
    }

    #[tokio::test]
    async fn test_aggregate_all_reports_rejection() {
        let fetcher = from_fn(|key: ResourceKey| async move {
            if key.as_str() == "y" {
                Err(FetchError::Status {
                    status: 404,
                    reason: "Not Found".into(),
                })
            } else {
                Ok(())
            }
        });
        let keys = ResourceSet::new(["x", "y"]).unwrap();

        let err = aggregate_all(&keys, &fetcher).await.unwrap_err();

        assert_eq!(
            err,
            AggregateError::Rejected {
                key: "y".into(),
                source: FetchError::Status {
                    status: 404,
                    reason: "Not Found".into()
                },
            }
        );
    }
}
