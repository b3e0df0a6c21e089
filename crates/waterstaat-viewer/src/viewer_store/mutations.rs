use crate::model::{LayerId, MapId, ScreenPos};
use serde_json::Value;
use viewer_framework::ResultMap;

/// Changes accepted by the viewer store.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerMutation {
    /// Metadata aggregation settled; marks the viewer as loaded.
    MetadataLoaded(ResultMap<Value>),
    SetLayerVisible { layer: LayerId, visible: bool },
    ToggleLayer(LayerId),
    SetBaseMap(bool),
    SetWater(bool),
    SetLabels(bool),
    SetMapsInViewport(Vec<MapId>),
    SelectMap(Option<MapId>),
    PointerMoved(ScreenPos),
}
