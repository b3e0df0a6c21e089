use super::edition::METADATA_EDITION_COUNT;
use super::layer::{LayerId, MapId, ScreenPos};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use viewer_framework::ResultMap;

/// Everything the map view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    /// Set once the metadata aggregation has settled.
    pub loaded: bool,
    /// Metadata per edition; failed editions are present but absent.
    /// Shared, so copying the state for a mutation leaves the documents alone.
    pub metadata: Arc<ResultMap<Value>>,
    /// Visibility of every registered warped-map layer.
    pub visible_layers: BTreeMap<LayerId, bool>,
    pub show_base_map: bool,
    pub show_water: bool,
    pub show_labels: bool,
    pub maps_in_viewport: Vec<MapId>,
    pub selected_map: Option<MapId>,
    pub pointer: ScreenPos,
}

impl ViewerState {
    /// Initial state with the given layers registered, all hidden.
    pub fn with_layers(layers: impl IntoIterator<Item = LayerId>) -> Self {
        Self {
            loaded: false,
            metadata: Arc::new(ResultMap::new()),
            visible_layers: layers.into_iter().map(|layer| (layer, false)).collect(),
            show_base_map: true,
            show_water: false,
            show_labels: false,
            maps_in_viewport: Vec::new(),
            selected_map: None,
            pointer: ScreenPos::default(),
        }
    }

    pub fn is_visible(&self, layer: LayerId) -> bool {
        self.visible_layers.get(&layer).copied().unwrap_or(false)
    }

    pub fn visible(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.visible_layers
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(layer, _)| *layer)
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::with_layers((1..=METADATA_EDITION_COUNT).map(LayerId))
    }
}
