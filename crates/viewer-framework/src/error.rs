//! # Framework Errors
//!
//! Error types shared by the aggregators and the state store. Per-resource
//! failures ([`FetchError`]) are recovered inside an aggregation; the other
//! two types reach the caller.

use crate::key::ResourceKey;

/// Why a single resource could not be fetched.
///
/// These never abort a settle-all aggregation. They are logged and the
/// resource is recorded as absent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout,
    /// body read interrupted, ...).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    /// The body arrived but is not a valid document.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Failures of an aggregation call as a whole.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("Resource key must not be empty")]
    EmptyKey,
    #[error("Duplicate resource key: {0}")]
    DuplicateKey(ResourceKey),
    #[error("Fetcher panicked while fetching {key}")]
    FetcherPanicked { key: ResourceKey },
    /// Only produced by the fail-fast [`aggregate_all`](crate::aggregate_all).
    #[error("Fetching {key} failed: {source}")]
    Rejected {
        key: ResourceKey,
        #[source]
        source: FetchError,
    },
}

/// Errors that can occur while talking to a [`StateStore`](crate::StateStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the state's own error type from a rejected mutation.
    ///
    /// Returns the error unchanged if it is not a [`StoreError::StateError`]
    /// or holds a different type.
    pub fn downcast_state<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            StoreError::StateError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(StoreError::StateError),
            other => Err(other),
        }
    }
}
