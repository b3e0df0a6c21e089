//! # StoreState Trait
//!
//! The `StoreState` trait is the contract a piece of UI state implements to
//! be owned by a [`StateStore`](crate::StateStore). The state decides how a
//! mutation changes it and whether anything actually changed; the store
//! takes care of the message loop, sequencing and notifying subscribers.
//!
//! Mutations are a per-state enum (`type Mutation`), so a timeline mutation
//! can never be sent to the viewer store. Errors are per-state as well
//! (`type Error`), one enum for every mutation of that state.

use std::fmt::Debug;

/// State value owned by a [`StateStore`](crate::StateStore).
///
/// The store applies each mutation to a copy and keeps it only on `Ok(true)`,
/// so a rejected mutation never leaves a partial change behind.
pub trait StoreState: Clone + Debug + Send + Sync + 'static {
    /// The typed changes this state accepts.
    type Mutation: Send + Sync + Debug;

    /// The error type for rejected mutations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies `mutation`, returning `true` if the state changed.
    ///
    /// Returning `false` means the mutation was a no-op and subscribers are
    /// not notified.
    fn apply(&mut self, mutation: Self::Mutation) -> Result<bool, Self::Error>;
}
