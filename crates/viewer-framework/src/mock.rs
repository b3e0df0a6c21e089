//! # Mocks & Testing Guide
//!
//! Two kinds of test doubles live here.
//!
//! ## `MockFetcher`: scripted resources
//!
//! [`MockFetcher`] implements [`Fetcher`] from a script: per key, a document
//! to return, an error to fail with, an optional delay, or a panic. It
//! records every call, the settling order and the peak number of fetches
//! in flight, which lets a test prove that an aggregator issued all fetches
//! before awaiting any.
//!
//! ```rust
//! use viewer_framework::mock::MockFetcher;
//! use viewer_framework::{aggregate, FetchError, ResourceSet};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut fetcher = MockFetcher::new()
//!         .respond("a", 1)
//!         .fail("b", FetchError::Transport("network error".into()))
//!         .respond("c", 3);
//!     for key in ["a", "b", "c"] {
//!         fetcher = fetcher.delay(key, Duration::from_millis(5));
//!     }
//!
//!     let keys = ResourceSet::new(["a", "b", "c"]).unwrap();
//!     let results = aggregate(&keys, &fetcher).await.unwrap();
//!
//!     assert_eq!(results.get("c"), Some(&3));
//!     assert!(results.is_absent("b"));
//!     assert_eq!(fetcher.peak_in_flight(), 3);
//!     fetcher.verify();
//! }
//! ```
//!
//! ## Store helpers: testing clients without a store task
//!
//! [`create_mock_client`] returns a real [`StoreClient`] and the receiving
//! end of its channel. The test plays the store: it pulls the next request
//! with [`expect_apply`], [`expect_snapshot`] or [`expect_subscribe`],
//! inspects it and answers through the responder. This is the way to check
//! which mutation a domain client sends, or how it reacts to an error the
//! real store would rarely produce.
//!
//! | | mock helpers | real `StateStore` |
//! |---|---|---|
//! | **State** | none, the test answers | real state + notifications |
//! | **Error injection** | send any `StoreError` | only what `apply` returns |
//! | **Use case** | logic *around* the client | the state itself, full system |

use crate::client::StoreClient;
use crate::error::{FetchError, StoreError};
use crate::fetcher::Fetcher;
use crate::key::ResourceKey;
use crate::message::StoreRequest;
use crate::state::StoreState;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// SCRIPTED FETCHER
// =============================================================================

enum Script<D> {
    Respond(D),
    Fail(FetchError),
    Panic,
}

#[derive(Default)]
struct Calls {
    issued: Vec<ResourceKey>,
    settled: Vec<ResourceKey>,
    in_flight: usize,
    peak_in_flight: usize,
}

/// A [`Fetcher`] answering from a per-key script.
///
/// Keys without a script fail with [`FetchError::Transport`].
pub struct MockFetcher<D> {
    scripts: HashMap<ResourceKey, Script<D>>,
    delays: HashMap<ResourceKey, Duration>,
    calls: Arc<Mutex<Calls>>,
}

impl<D> Default for MockFetcher<D> {
    fn default() -> Self {
        Self {
            scripts: HashMap::new(),
            delays: HashMap::new(),
            calls: Arc::new(Mutex::new(Calls::default())),
        }
    }
}

impl<D: Clone + Send + Sync + 'static> MockFetcher<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetching `key` succeeds with `document`.
    pub fn respond(mut self, key: impl Into<ResourceKey>, document: D) -> Self {
        self.scripts.insert(key.into(), Script::Respond(document));
        self
    }

    /// Fetching `key` fails with `error`.
    pub fn fail(mut self, key: impl Into<ResourceKey>, error: FetchError) -> Self {
        self.scripts.insert(key.into(), Script::Fail(error));
        self
    }

    /// Fetching `key` panics, simulating a defective fetcher.
    pub fn panic_on(mut self, key: impl Into<ResourceKey>) -> Self {
        self.scripts.insert(key.into(), Script::Panic);
        self
    }

    /// Fetching `key` sleeps for `delay` before settling.
    pub fn delay(mut self, key: impl Into<ResourceKey>, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self
    }

    /// Keys fetched so far, in the order the fetches started.
    pub fn calls(&self) -> Vec<ResourceKey> {
        self.lock().issued.clone()
    }

    /// Keys whose fetch reached a terminal state, in settling order.
    pub fn settled(&self) -> Vec<ResourceKey> {
        self.lock().settled.clone()
    }

    /// Highest number of fetches that were running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.lock().peak_in_flight
    }

    /// Panics unless every scripted key was fetched exactly once.
    pub fn verify(&self) {
        let calls = self.lock();
        for key in self.scripts.keys() {
            let count = calls.issued.iter().filter(|k| *k == key).count();
            if count != 1 {
                panic!("Expected exactly one fetch of {key}, got {count}");
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Calls> {
        match self.calls.lock() {
            Ok(guard) => guard,
            // Counters are updated in single statements, so they stay consistent after a poison.
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<D: Clone + Send + Sync + 'static> Fetcher for MockFetcher<D> {
    type Document = D;

    async fn fetch(&self, key: &ResourceKey) -> Result<D, FetchError> {
        {
            let mut calls = self.lock();
            calls.issued.push(key.clone());
            calls.in_flight += 1;
            calls.peak_in_flight = calls.peak_in_flight.max(calls.in_flight);
        }

        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }

        {
            let mut calls = self.lock();
            calls.in_flight -= 1;
            calls.settled.push(key.clone());
        }

        match self.scripts.get(key) {
            Some(Script::Respond(doc)) => Ok(doc.clone()),
            Some(Script::Fail(e)) => Err(e.clone()),
            Some(Script::Panic) => panic!("scripted panic for {key}"),
            None => Err(FetchError::Transport(format!("no response scripted for {key}"))),
        }
    }
}

// =============================================================================
// STORE HELPERS
// =============================================================================

/// Creates a client whose requests land in the returned receiver.
pub fn create_mock_client<S: StoreState>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Apply request
pub async fn expect_apply<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Mutation, oneshot::Sender<Result<bool, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Apply {
            mutation,
            respond_to,
        }) => Some((mutation, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<Result<S, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Subscribe request
pub async fn expect_subscribe<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<oneshot::Sender<Result<watch::Receiver<S>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Subscribe { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::key::ResourceSet;

    #[tokio::test]
    async fn test_unscripted_key_fails() {
        let fetcher = MockFetcher::<u8>::new();
        let result = fetcher.fetch(&"missing".into()).await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
        assert_eq!(fetcher.calls(), vec![ResourceKey::from("missing")]);
    }

    #[tokio::test]
    async fn test_records_concurrency() {
        let fetcher = MockFetcher::new()
            .respond("a", 1)
            .respond("b", 2)
            .delay("a", Duration::from_millis(10))
            .delay("b", Duration::from_millis(10));
        let keys = ResourceSet::new(["a", "b"]).unwrap();

        aggregate(&keys, &fetcher).await.unwrap();

        assert_eq!(fetcher.peak_in_flight(), 2);
        fetcher.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Expected exactly one fetch")]
    async fn test_verify_flags_unused_script() {
        let fetcher = MockFetcher::new().respond("a", 1).respond("b", 2);
        fetcher.fetch(&"a".into()).await.unwrap();
        fetcher.verify();
    }
}
