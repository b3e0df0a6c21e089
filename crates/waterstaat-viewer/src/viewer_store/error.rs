use crate::model::LayerId;

/// Errors of the viewer store and its client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerStateError {
    #[error("Unknown layer: {0}")]
    UnknownLayer(LayerId),
    #[error("Invalid pointer position: ({x}, {y})")]
    InvalidPointer { x: f64, y: f64 },
    #[error("Viewer store unavailable: {0}")]
    StoreUnavailable(String),
}
