//! # Viewer Client
//!
//! Provides a high-level API for the viewer store. It wraps a
//! `StoreClient<ViewerState>` and exposes one method per view interaction.
use crate::model::{LayerId, MapId, ScreenPos, ViewerState};
use crate::viewer_store::{ViewerMutation, ViewerStateError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};
use viewer_framework::{ResultMap, StateClient, StoreClient, StoreError};

/// Client for the viewer store.
#[derive(Clone)]
pub struct ViewerClient {
    inner: StoreClient<ViewerState>,
}

impl ViewerClient {
    pub fn new(inner: StoreClient<ViewerState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StateClient<ViewerState> for ViewerClient {
    type Error = ViewerStateError;

    fn inner(&self) -> &StoreClient<ViewerState> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e.downcast_state::<ViewerStateError>()
            .unwrap_or_else(|e| ViewerStateError::StoreUnavailable(e.to_string()))
    }
}

impl ViewerClient {
    async fn send(&self, mutation: ViewerMutation) -> Result<bool, ViewerStateError> {
        self.inner.apply(mutation).await.map_err(Self::map_error)
    }

    /// Current viewer state.
    pub async fn state(&self) -> Result<ViewerState, ViewerStateError> {
        self.snapshot().await
    }

    #[instrument(skip(self, metadata), fields(editions = metadata.len()))]
    pub async fn metadata_loaded(&self, metadata: ResultMap<Value>) -> Result<bool, ViewerStateError> {
        debug!("Publishing metadata");
        self.send(ViewerMutation::MetadataLoaded(metadata)).await
    }

    #[instrument(skip(self))]
    pub async fn set_layer_visible(
        &self,
        layer: LayerId,
        visible: bool,
    ) -> Result<bool, ViewerStateError> {
        debug!("Sending request");
        self.send(ViewerMutation::SetLayerVisible { layer, visible })
            .await
    }

    #[instrument(skip(self))]
    pub async fn toggle_layer(&self, layer: LayerId) -> Result<bool, ViewerStateError> {
        debug!("Sending request");
        self.send(ViewerMutation::ToggleLayer(layer)).await
    }

    #[instrument(skip(self))]
    pub async fn set_base_map(&self, show: bool) -> Result<bool, ViewerStateError> {
        self.send(ViewerMutation::SetBaseMap(show)).await
    }

    #[instrument(skip(self))]
    pub async fn set_water(&self, show: bool) -> Result<bool, ViewerStateError> {
        self.send(ViewerMutation::SetWater(show)).await
    }

    #[instrument(skip(self))]
    pub async fn set_labels(&self, show: bool) -> Result<bool, ViewerStateError> {
        self.send(ViewerMutation::SetLabels(show)).await
    }

    #[instrument(skip(self, maps), fields(count = maps.len()))]
    pub async fn set_maps_in_viewport(&self, maps: Vec<MapId>) -> Result<bool, ViewerStateError> {
        self.send(ViewerMutation::SetMapsInViewport(maps)).await
    }

    #[instrument(skip(self))]
    pub async fn select_map(&self, map: Option<MapId>) -> Result<bool, ViewerStateError> {
        debug!("Sending request");
        self.send(ViewerMutation::SelectMap(map)).await
    }

    /// Records the pointer position over the map.
    pub async fn pointer_moved(&self, pos: ScreenPos) -> Result<bool, ViewerStateError> {
        self.send(ViewerMutation::PointerMoved(pos)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::watch;
    use viewer_framework::mock::{create_mock_client, expect_apply, expect_subscribe};

    #[tokio::test]
    async fn test_set_layer_visible_sends_mutation() {
        let (client, mut receiver) = create_mock_client::<ViewerState>(10);
        let viewer_client = ViewerClient::new(client);

        let task = tokio::spawn(async move {
            viewer_client.set_layer_visible(LayerId(2), true).await
        });

        let (mutation, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(
            mutation,
            ViewerMutation::SetLayerVisible {
                layer: LayerId(2),
                visible: true
            }
        );
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_state_error_is_recovered_from_store_error() {
        let (client, mut receiver) = create_mock_client::<ViewerState>(10);
        let viewer_client = ViewerClient::new(client);

        let task = tokio::spawn(async move { viewer_client.toggle_layer(LayerId(7)).await });

        let (_, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        responder
            .send(Err(StoreError::StateError(Box::new(
                ViewerStateError::UnknownLayer(LayerId(7)),
            ))))
            .unwrap();

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err, ViewerStateError::UnknownLayer(LayerId(7)));
    }

    #[tokio::test]
    async fn test_dropped_store_is_unavailable() {
        let (client, receiver) = create_mock_client::<ViewerState>(1);
        drop(receiver);
        let viewer_client = ViewerClient::new(client);

        let err = viewer_client.set_water(true).await.unwrap_err();
        assert!(matches!(err, ViewerStateError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_base_map_and_labels_send_mutations() {
        let (client, mut receiver) = create_mock_client::<ViewerState>(10);
        let viewer_client = ViewerClient::new(client);

        let task = tokio::spawn(async move {
            let base_map = viewer_client.set_base_map(false).await?;
            let labels = viewer_client.set_labels(true).await?;
            Ok::<_, ViewerStateError>((base_map, labels))
        });

        let (mutation, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(mutation, ViewerMutation::SetBaseMap(false));
        responder.send(Ok(true)).unwrap();

        let (mutation, responder) = expect_apply(&mut receiver)
            .await
            .expect("Expected Apply request");
        assert_eq!(mutation, ViewerMutation::SetLabels(true));
        // The store reports a no-op.
        responder.send(Ok(false)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), (true, false));
    }

    #[tokio::test]
    async fn test_subscribe_hands_out_store_receiver() {
        let (client, mut receiver) = create_mock_client::<ViewerState>(10);
        let viewer_client = ViewerClient::new(client);

        let task = tokio::spawn(async move { viewer_client.subscribe().await });

        let responder = expect_subscribe(&mut receiver)
            .await
            .expect("Expected Subscribe request");
        let mut state = ViewerState::default();
        state.show_water = true;
        let (publisher, updates) = watch::channel(state);
        responder.send(Ok(updates)).unwrap();

        let mut updates = task.await.unwrap().unwrap();
        assert!(updates.borrow().show_water);

        publisher.send_modify(|state| state.selected_map = Some(MapId::new("sheet-2")));
        updates.changed().await.unwrap();
        assert_eq!(
            updates.borrow_and_update().selected_map,
            Some(MapId::new("sheet-2"))
        );
    }
}
