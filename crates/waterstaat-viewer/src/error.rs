//! # Viewer Errors
//!
//! Errors that cross module boundaries. Store-level errors live next to
//! their stores ([`ViewerStateError`], [`TimelineError`]).

use viewer_framework::AggregateError;

pub use crate::timeline_store::TimelineError;
pub use crate::viewer_store::ViewerStateError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    #[error("Interpolation factor {0} is outside [0, 1]")]
    FactorOutOfRange(f64),
}

/// Invalid `VIEWER_*` environment settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {value:?} is not a positive number")]
    InvalidNumber { var: String, value: String },
    #[error("Invalid {var}: {template:?} has no {{key}} placeholder")]
    InvalidTemplate { var: String, template: String },
    #[error("Invalid {var}: {reason}")]
    InvalidEditions { var: String, reason: String },
}

/// Top-level error of the viewer application.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    ViewerState(#[from] ViewerStateError),
    #[error(transparent)]
    Timeline(#[from] TimelineError),
    #[error(transparent)]
    Easing(#[from] EasingError),
    #[error("HTTP client error: {0}")]
    Http(String),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
