use super::{TimelineError, TimelineMutation};
use crate::model::{TimelineHover, TimelineState};
use crate::viewer_store::state::replace;
use viewer_framework::StoreState;

impl StoreState for TimelineState {
    type Mutation = TimelineMutation;
    type Error = TimelineError;

    fn apply(&mut self, mutation: TimelineMutation) -> Result<bool, TimelineError> {
        match mutation {
            TimelineMutation::SetHorizontal(horizontal) => {
                Ok(replace(&mut self.horizontal, horizontal))
            }
            TimelineMutation::Resize(0) => Err(TimelineError::InvalidSize(0)),
            TimelineMutation::Resize(size) => Ok(replace(&mut self.size, size)),
            TimelineMutation::Hover { map, x, y } => {
                if !(x.is_finite() && y.is_finite()) {
                    return Err(TimelineError::InvalidPosition { x, y });
                }
                Ok(replace(&mut self.hovered, Some(TimelineHover { map, x, y })))
            }
            TimelineMutation::ClearHover => Ok(replace(&mut self.hovered, None)),
            TimelineMutation::Click(map) => Ok(replace(&mut self.clicked, map)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MapId;

    #[test]
    fn test_resize() {
        let mut state = TimelineState::default();
        assert_eq!(state.size, 160);
        assert!(state.apply(TimelineMutation::Resize(240)).unwrap());
        assert!(!state.apply(TimelineMutation::Resize(240)).unwrap());
        assert_eq!(
            state.apply(TimelineMutation::Resize(0)),
            Err(TimelineError::InvalidSize(0))
        );
    }

    #[test]
    fn test_hover_and_clear() {
        let mut state = TimelineState::default();
        let hover = TimelineMutation::Hover {
            map: MapId::new("sheet-7"),
            x: 40.0,
            y: 12.5,
        };
        assert!(state.apply(hover.clone()).unwrap());
        assert!(!state.apply(hover).unwrap());
        assert_eq!(state.hovered.as_ref().map(|h| h.x), Some(40.0));

        assert!(state.apply(TimelineMutation::ClearHover).unwrap());
        assert!(!state.apply(TimelineMutation::ClearHover).unwrap());
    }

    #[test]
    fn test_hover_rejects_non_finite_position() {
        let mut state = TimelineState::default();
        let err = state
            .apply(TimelineMutation::Hover {
                map: MapId::new("sheet-1"),
                x: f64::INFINITY,
                y: 0.0,
            })
            .unwrap_err();
        assert!(matches!(err, TimelineError::InvalidPosition { .. }));
    }

    #[test]
    fn test_set_horizontal() {
        let mut state = TimelineState::default();
        assert!(!state.apply(TimelineMutation::SetHorizontal(false)).unwrap());
        assert!(state.apply(TimelineMutation::SetHorizontal(true)).unwrap());
        assert!(state.horizontal);
        assert!(!state.apply(TimelineMutation::SetHorizontal(true)).unwrap());
    }

    #[test]
    fn test_click_and_unclick() {
        let mut state = TimelineState::default();
        let sheet = Some(MapId::new("sheet-3"));

        assert!(!state.apply(TimelineMutation::Click(None)).unwrap());
        assert!(state.apply(TimelineMutation::Click(sheet.clone())).unwrap());
        assert!(!state.apply(TimelineMutation::Click(sheet.clone())).unwrap());
        assert_eq!(state.clicked, sheet);
        assert!(state.apply(TimelineMutation::Click(None)).unwrap());
        assert_eq!(state.clicked, None);
    }
}
