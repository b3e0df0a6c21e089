//! # Store Messages
//!
//! The messages a [`StoreClient`](crate::StoreClient) sends to its
//! [`StateStore`](crate::StateStore). Each carries a one-shot channel for
//! the reply.

use crate::error::StoreError;
use crate::state::StoreState;
use tokio::sync::{oneshot, watch};

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store.
///
/// - **Snapshot**: read a clone of the current state.
/// - **Apply**: run a [`StoreState::Mutation`]; replies whether it changed anything.
/// - **Subscribe**: obtain a receiver that observes every changed state.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Snapshot {
        respond_to: Response<S>,
    },
    Apply {
        mutation: S::Mutation,
        respond_to: Response<bool>,
    },
    Subscribe {
        respond_to: Response<watch::Receiver<S>>,
    },
}
