//! # System Lifecycle
//!
//! Wires the viewer together: both state stores run as their own tasks, the
//! manifest client is built from configuration, and [`ViewerSystem`] hands
//! out typed clients to the rest of the application.
//!
//! ## Startup
//!
//! 1. **Store creation** - `viewer_store::new` and `timeline_store::new`
//! 2. **Task spawn** - each store's `run()` loop gets its own Tokio task
//! 3. **Loading** - [`ViewerSystem::load_metadata`] aggregates the metadata
//!    editions and publishes the result into the viewer store
//!
//! ## Graceful Shutdown
//!
//! [`ViewerSystem::shutdown`] drops the system's clients. A store stops when
//! its channel closes, so any client clone still held elsewhere keeps that
//! store alive until it is dropped too. The store tasks are then awaited and
//! a task that panicked is reported as [`ViewerError::Shutdown`](crate::error::ViewerError::Shutdown).
//!
//! ## Observability
//!
//! Logging is set up once with
//! [`setup_tracing`](viewer_framework::tracing::setup_tracing):
//!
//! ```bash
//! RUST_LOG=info cargo run      # Aggregation summaries and state changes
//! RUST_LOG=debug cargo run     # Every fetch and every request
//! ```

pub mod viewer_system;

pub use viewer_system::*;
