//! # Viewer Framework
//!
//! Domain-free building blocks for the client side of a map viewer: fetching
//! a fixed set of named documents without letting one failure take the
//! others down, and owning UI state in a task instead of in globals.
//!
//! ## Resource Aggregation
//!
//! A viewer typically needs several independent documents before it can
//! draw anything useful (one metadata file per edition, one annotation page
//! per sheet series, ...). Some of them may be missing. The aggregator fans
//! a [`ResourceSet`] out over a [`Fetcher`] and joins the results:
//!
//! - [`aggregate`] **settles all** fetches. A failed resource is logged and
//!   kept in the [`ResultMap`] with an absence marker; the call itself only
//!   fails for setup defects (see [`AggregateError`]).
//! - [`aggregate_all`] is **all-or-nothing**, for sets where a partial
//!   result is useless.
//!
//! Per key the state machine is `Pending -> Fulfilled | Rejected`; terminal
//! states never change. All fetches are issued before any is awaited and
//! run concurrently on the calling task.
//!
//! ```rust
//! use viewer_framework::{aggregate, from_fn, FetchError, ResourceKey, ResourceSet};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let fetch_one = from_fn(|key: ResourceKey| async move {
//!         if key.as_str() == "editie-3" {
//!             return Err(FetchError::Status { status: 404, reason: "Not Found".into() });
//!         }
//!         Ok(format!("metadata of {key}"))
//!     });
//!
//!     let editions = ResourceSet::new(["editie-1", "editie-2", "editie-3"]).unwrap();
//!     let metadata = aggregate(&editions, &fetch_one).await.unwrap();
//!
//!     assert_eq!(metadata.fulfilled_count(), 2);
//!     assert!(metadata.is_absent("editie-3"));
//! }
//! ```
//!
//! ## State Stores
//!
//! UI state (hovered map, selected map, visible layers, ...) is owned by a
//! [`StateStore`] task. Components talk to it through a cloneable
//! [`StoreClient`]:
//!
//! 1. **State Layer** ([`StoreState`]) - the state value and how typed
//!    mutations change it
//! 2. **Runtime Layer** ([`StateStore`]) - sequential message processing and
//!    change notification
//! 3. **Interface Layer** ([`StoreClient`], [`StateClient`]) - typed
//!    requests and subscriptions
//!
//! Observers call `subscribe()` and get a `tokio::sync::watch::Receiver`
//! that sees every effective change. Mutations that change nothing do not
//! wake observers.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockFetcher`](mock::MockFetcher) for
//! scripted resources and channel-level helpers for testing store clients
//! without spawning a store.

pub mod aggregator;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod fetcher;
pub mod key;
pub mod message;
pub mod mock;
pub mod outcome;
pub mod state;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use aggregator::{aggregate, aggregate_all};
pub use client::StoreClient;
pub use client_trait::{spawn_store, StateClient};
pub use error::{AggregateError, FetchError, StoreError};
pub use fetcher::{from_fn, Fetcher, FnFetcher};
pub use key::{ResourceKey, ResourceSet};
pub use message::{Response, StoreRequest};
pub use outcome::{FetchOutcome, ResultMap};
pub use state::StoreState;
pub use store::StateStore;
