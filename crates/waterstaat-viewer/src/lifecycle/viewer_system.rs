use crate::clients::{ManifestClient, TimelineClient, ViewerClient};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::model::{TimelineState, ViewerState};
use crate::{timeline_store, viewer_store};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};
use viewer_framework::ResultMap;

/// The running viewer: store tasks plus the clients talking to them.
pub struct ViewerSystem {
    pub viewer_client: ViewerClient,
    pub timeline_client: TimelineClient,
    pub manifest_client: ManifestClient,
    handles: Vec<JoinHandle<()>>,
}

impl ViewerSystem {
    /// Starts the stores and builds HTTP fetchers from `config`.
    pub fn new(config: &ViewerConfig) -> Result<Self, ViewerError> {
        let manifest_client = ManifestClient::from_config(config)?;
        Ok(Self::with_manifest_client(manifest_client, config.store_buffer))
    }

    /// Starts the stores around an existing manifest client.
    ///
    /// Only the catalog's metadata editions get a layer.
    pub fn with_manifest_client(manifest_client: ManifestClient, store_buffer: usize) -> Self {
        let layers = manifest_client.catalog().layers();
        let (viewer_store, viewer_client) =
            viewer_store::new(ViewerState::with_layers(layers), store_buffer);
        let (timeline_store, timeline_client) =
            timeline_store::new(TimelineState::default(), store_buffer);

        let handles = vec![
            tokio::spawn(viewer_store.run()),
            tokio::spawn(timeline_store.run()),
        ];
        info!(layers = manifest_client.catalog().layers().len(), "Viewer started");

        Self {
            viewer_client: ViewerClient::new(viewer_client),
            timeline_client: TimelineClient::new(timeline_client),
            manifest_client,
            handles,
        }
    }

    /// Aggregates the metadata editions and publishes them to the viewer
    /// store. Failed editions stay in the map without a document.
    #[instrument(skip(self))]
    pub async fn load_metadata(&self) -> Result<ResultMap<Value>, ViewerError> {
        let metadata = self.manifest_client.load_metadata().await?;
        let missing: Vec<String> = metadata.absent().map(|key| key.to_string()).collect();
        if !missing.is_empty() {
            warn!(?missing, "Some editions have no metadata");
        }
        self.viewer_client.metadata_loaded(metadata.clone()).await?;
        Ok(metadata)
    }

    /// Drops the clients and waits for the store tasks to finish.
    pub async fn shutdown(self) -> Result<(), ViewerError> {
        info!("Shutting down viewer");
        drop(self.viewer_client);
        drop(self.timeline_client);
        drop(self.manifest_client);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| ViewerError::Shutdown(e.to_string()))?;
        }
        info!("Viewer stopped");
        Ok(())
    }
}
