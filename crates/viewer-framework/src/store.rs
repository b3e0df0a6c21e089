//! # State Store
//!
//! `StateStore<S>` is the task that owns one piece of UI state. It replaces
//! globally shared mutable state: nothing outside the task can touch `S`,
//! every change arrives as a message, and observers hold a
//! [`watch::Receiver`] instead of reaching into a shared object.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The task side of a store.
///
/// **Concurrency Model**:
/// Messages are processed one at a time, so `state` needs no lock. Many
/// stores can run side by side, each in its own Tokio task.
///
/// **Notifications**:
/// After a mutation that changed the state, the new state is published on a
/// `watch` channel. No-op mutations publish nothing. A subscriber that lags
/// behind only ever sees the latest state.
///
/// # Usage Pattern
///
/// ```rust
/// use viewer_framework::{StateStore, StoreState};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter(u32);
///
/// #[derive(Debug)]
/// enum CounterMutation { Set(u32) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never")]
/// struct Never;
///
/// impl StoreState for Counter {
///     type Mutation = CounterMutation;
///     type Error = Never;
///
///     fn apply(&mut self, mutation: CounterMutation) -> Result<bool, Never> {
///         let CounterMutation::Set(n) = mutation;
///         let changed = self.0 != n;
///         self.0 = n;
///         Ok(changed)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (store, client) = StateStore::new(Counter::default(), 8);
///     tokio::spawn(store.run());
///
///     let mut updates = client.subscribe().await.unwrap();
///     assert!(client.apply(CounterMutation::Set(3)).await.unwrap());
///     updates.changed().await.unwrap();
///     assert_eq!(updates.borrow().0, 3);
/// }
/// ```
pub struct StateStore<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StateStore<S> {
    /// Creates a store holding `initial` and the client used to reach it.
    ///
    /// `buffer_size` is the capacity of the request channel; clients wait
    /// when it is full.
    pub fn new(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, _) = watch::channel(initial.clone());
        let store = Self {
            receiver,
            state: initial,
            publisher,
        };
        (store, StoreClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        // e.g. "ViewerState" instead of "waterstaat_viewer::model::viewer::ViewerState"
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Apply {
                    mutation,
                    respond_to,
                } => {
                    debug!(state_type, ?mutation, "Apply");
                    let mut next = self.state.clone();
                    match next.apply(mutation) {
                        Ok(true) => {
                            self.state = next;
                            self.publisher.send_replace(self.state.clone());
                            info!(
                                state_type,
                                subscribers = self.publisher.receiver_count(),
                                "Changed"
                            );
                            let _ = respond_to.send(Ok(true));
                        }
                        Ok(false) => {
                            debug!(state_type, "Unchanged");
                            let _ = respond_to.send(Ok(false));
                        }
                        Err(e) => {
                            warn!(state_type, error = %e, "Mutation rejected");
                            let _ = respond_to.send(Err(StoreError::StateError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Subscribe { respond_to } => {
                    debug!(state_type, "Subscribe");
                    let _ = respond_to.send(Ok(self.publisher.subscribe()));
                }
            }
        }

        info!(state_type, "Shutdown");
    }
}
