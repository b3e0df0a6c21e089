//! # StateClient Trait
//!
//! Common interface for domain-specific store clients. A wrapper implements
//! `inner` and `map_error` and gets `snapshot` and `subscribe` for free,
//! returning its own error type.
use crate::{StateStore, StoreClient, StoreError, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients wrapping a [`StoreClient`].
///
/// # Example
///
/// ```rust
/// use viewer_framework::{StateClient, StoreClient, StoreError, StoreState};
///
/// #[derive(Clone, Debug, Default)]
/// struct Flags { dark: bool }
///
/// #[derive(Debug)]
/// enum FlagsMutation { SetDark(bool) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct FlagsError(String);
///
/// impl StoreState for Flags {
///     type Mutation = FlagsMutation;
///     type Error = FlagsError;
///     fn apply(&mut self, m: FlagsMutation) -> Result<bool, FlagsError> {
///         let FlagsMutation::SetDark(dark) = m;
///         let changed = self.dark != dark;
///         self.dark = dark;
///         Ok(changed)
///     }
/// }
///
/// struct FlagsClient { inner: StoreClient<Flags> }
///
/// impl StateClient<Flags> for FlagsClient {
///     type Error = FlagsError;
///     fn inner(&self) -> &StoreClient<Flags> { &self.inner }
///     fn map_error(e: StoreError) -> FlagsError { FlagsError(e.to_string()) }
/// }
///
/// async fn usage(client: FlagsClient) {
///     // snapshot() and subscribe() are provided automatically
///     let _ = client.snapshot().await;
///     let _ = client.subscribe().await;
/// }
/// ```
#[async_trait]
pub trait StateClient<S: StoreState>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Current state of the store.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Receiver observing every change of the state.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<watch::Receiver<S>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().subscribe().await.map_err(Self::map_error)
    }
}

/// Spawns a store for `initial` and returns its client and task handle.
///
/// Shorthand for [`StateStore::new`] followed by `tokio::spawn(store.run())`.
pub fn spawn_store<S: StoreState>(
    initial: S,
    buffer_size: usize,
) -> (StoreClient<S>, tokio::task::JoinHandle<()>) {
    let (store, client) = StateStore::new(initial, buffer_size);
    let handle = tokio::spawn(store.run());
    (client, handle)
}
