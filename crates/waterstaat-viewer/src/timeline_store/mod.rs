//! # Timeline Store
//!
//! The store owning [`TimelineState`]: orientation and size of the edition
//! timeline and the map the pointer is over or clicked on.

pub mod error;
pub mod mutations;
pub mod state;

pub use error::*;
pub use mutations::*;

use crate::model::TimelineState;
use viewer_framework::{StateStore, StoreClient};

/// Creates a new timeline store and its client.
pub fn new(
    initial: TimelineState,
    buffer_size: usize,
) -> (StateStore<TimelineState>, StoreClient<TimelineState>) {
    StateStore::new(initial, buffer_size)
}
