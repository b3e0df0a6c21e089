use super::layer::MapId;

/// Default timeline size in pixels.
pub const DEFAULT_TIMELINE_SIZE: u32 = 160;

/// A map hovered in the timeline, with the pointer position inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineHover {
    pub map: MapId,
    pub x: f64,
    pub y: f64,
}

/// Layout and pointer state of the edition timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    pub horizontal: bool,
    /// Height (vertical) or width (horizontal) in pixels, never zero.
    pub size: u32,
    pub hovered: Option<TimelineHover>,
    pub clicked: Option<MapId>,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self {
            horizontal: false,
            size: DEFAULT_TIMELINE_SIZE,
            hovered: None,
            clicked: None,
        }
    }
}
