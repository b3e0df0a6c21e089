//! # Timeline Client
//!
//! Wraps a `StoreClient<TimelineState>`. Besides the plain setters it can
//! animate a resize, sending one eased `Resize` per frame.
use crate::easing::Easing;
use crate::model::{MapId, TimelineState};
use crate::timeline_store::{TimelineError, TimelineMutation};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use viewer_framework::{StateClient, StoreClient, StoreError};

/// Pause between two animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Client for the timeline store.
#[derive(Clone)]
pub struct TimelineClient {
    inner: StoreClient<TimelineState>,
}

impl TimelineClient {
    pub fn new(inner: StoreClient<TimelineState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StateClient<TimelineState> for TimelineClient {
    type Error = TimelineError;

    fn inner(&self) -> &StoreClient<TimelineState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast_state::<TimelineError>()
            .unwrap_or_else(|e| TimelineError::StoreUnavailable(e.to_string()))
    }
}

impl TimelineClient {
    async fn send(&self, mutation: TimelineMutation) -> Result<bool, TimelineError> {
        self.inner.apply(mutation).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_horizontal(&self, horizontal: bool) -> Result<bool, TimelineError> {
        self.send(TimelineMutation::SetHorizontal(horizontal)).await
    }

    #[instrument(skip(self))]
    pub async fn resize(&self, size: u32) -> Result<bool, TimelineError> {
        self.send(TimelineMutation::Resize(size)).await
    }

    pub async fn hover(&self, map: MapId, x: f64, y: f64) -> Result<bool, TimelineError> {
        self.send(TimelineMutation::Hover { map, x, y }).await
    }

    pub async fn clear_hover(&self) -> Result<bool, TimelineError> {
        self.send(TimelineMutation::ClearHover).await
    }

    #[instrument(skip(self))]
    pub async fn click(&self, map: Option<MapId>) -> Result<bool, TimelineError> {
        self.send(TimelineMutation::Click(map)).await
    }

    /// Moves the size from its current value to `target` in `steps` frames
    /// along `easing`. The last frame always lands exactly on `target`.
    ///
    /// Returns the final size.
    #[instrument(skip(self))]
    pub async fn animate_resize(
        &self,
        target: u32,
        steps: u32,
        easing: Easing,
    ) -> Result<u32, TimelineError> {
        if target == 0 {
            return Err(TimelineError::InvalidSize(0));
        }
        let start = self.snapshot().await?.size;
        debug!(start, "Animating resize");

        for step in 1..steps {
            let t = f64::from(step) / f64::from(steps);
            let size = easing
                .interpolate(f64::from(start), f64::from(target), t)?
                .round()
                .max(1.0) as u32;
            self.send(TimelineMutation::Resize(size)).await?;
            tokio::time::sleep(FRAME_INTERVAL).await;
        }
        self.send(TimelineMutation::Resize(target)).await?;
        Ok(target)
    }
}
