use super::{ViewerMutation, ViewerStateError};
use crate::model::ViewerState;
use std::sync::Arc;
use viewer_framework::StoreState;

/// Replaces `slot` with `value`, reporting whether it differed.
pub(crate) fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl StoreState for ViewerState {
    type Mutation = ViewerMutation;
    type Error = ViewerStateError;

    fn apply(&mut self, mutation: ViewerMutation) -> Result<bool, ViewerStateError> {
        match mutation {
            ViewerMutation::MetadataLoaded(metadata) => {
                let loaded = replace(&mut self.loaded, true);
                Ok(replace(&mut self.metadata, Arc::new(metadata)) || loaded)
            }
            ViewerMutation::SetLayerVisible { layer, visible } => {
                let slot = self
                    .visible_layers
                    .get_mut(&layer)
                    .ok_or(ViewerStateError::UnknownLayer(layer))?;
                Ok(replace(slot, visible))
            }
            ViewerMutation::ToggleLayer(layer) => {
                let slot = self
                    .visible_layers
                    .get_mut(&layer)
                    .ok_or(ViewerStateError::UnknownLayer(layer))?;
                *slot = !*slot;
                Ok(true)
            }
            ViewerMutation::SetBaseMap(show) => Ok(replace(&mut self.show_base_map, show)),
            ViewerMutation::SetWater(show) => Ok(replace(&mut self.show_water, show)),
            ViewerMutation::SetLabels(show) => Ok(replace(&mut self.show_labels, show)),
            ViewerMutation::SetMapsInViewport(maps) => {
                Ok(replace(&mut self.maps_in_viewport, maps))
            }
            ViewerMutation::SelectMap(map) => Ok(replace(&mut self.selected_map, map)),
            ViewerMutation::PointerMoved(pos) => {
                if !pos.is_finite() {
                    return Err(ViewerStateError::InvalidPointer { x: pos.x, y: pos.y });
                }
                Ok(replace(&mut self.pointer, pos))
            }
        }
    }
}
