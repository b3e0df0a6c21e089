//! # Viewer Store
//!
//! The store owning [`ViewerState`]: which warped-map layers are shown, the
//! base map toggles, the loaded metadata, the map selection and the pointer.
//!
//! ## Structure
//!
//! - [`mutations`] - [`ViewerMutation`], every change the view can request
//! - [`state`] - [`StoreState`](viewer_framework::StoreState) implementation for [`ViewerState`]
//! - [`error`] - [`ViewerStateError`]
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use waterstaat_viewer::clients::ViewerClient;
//! use waterstaat_viewer::model::{LayerId, ViewerState};
//! use waterstaat_viewer::viewer_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, generic_client) = viewer_store::new(ViewerState::default(), 32);
//!     let client = ViewerClient::new(generic_client);
//!     tokio::spawn(store.run());
//!
//!     client.set_layer_visible(LayerId(2), true).await?;
//!     assert!(client.state().await?.is_visible(LayerId(2)));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mutations;
pub mod state;

pub use error::*;
pub use mutations::*;

use crate::model::ViewerState;
use viewer_framework::{StateStore, StoreClient};

/// Creates a new viewer store and its client.
pub fn new(
    initial: ViewerState,
    buffer_size: usize,
) -> (StateStore<ViewerState>, StoreClient<ViewerState>) {
    StateStore::new(initial, buffer_size)
}
