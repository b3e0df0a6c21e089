use crate::model::MapId;

/// Changes accepted by the timeline store.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineMutation {
    SetHorizontal(bool),
    Resize(u32),
    Hover { map: MapId, x: f64, y: f64 },
    ClearHover,
    Click(Option<MapId>),
}
