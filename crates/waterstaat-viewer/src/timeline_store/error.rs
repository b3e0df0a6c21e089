use crate::error::EasingError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("Timeline size must be positive, got {0}")]
    InvalidSize(u32),
    #[error("Invalid hover position: ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
    #[error(transparent)]
    Easing(#[from] EasingError),
    #[error("Timeline store unavailable: {0}")]
    StoreUnavailable(String),
}
