//! # Waterstaatskaart Viewer
//!
//! Loads the edition metadata and annotation pages, shows every edition
//! that loaded and plays the timeline opening animation.
//!
//! Configuration comes from `VIEWER_*` environment variables (see
//! [`ViewerConfig::from_env`]), log levels from `RUST_LOG`.

use tracing::{info, warn, Instrument};
use viewer_framework::tracing::setup_tracing;
use waterstaat_viewer::config::ViewerConfig;
use waterstaat_viewer::easing::Easing;
use waterstaat_viewer::error::ViewerError;
use waterstaat_viewer::lifecycle::ViewerSystem;
use waterstaat_viewer::model::layer_for_edition;

#[tokio::main]
async fn main() -> Result<(), ViewerError> {
    setup_tracing();

    let config = ViewerConfig::from_env()?;
    info!(editions = config.metadata_editions.len(), "Starting viewer");

    let system = ViewerSystem::new(&config)?;

    let span = tracing::info_span!("metadata");
    let metadata = system.load_metadata().instrument(span).await?;

    for (edition, _) in metadata.fulfilled() {
        if let Some(layer) = layer_for_edition(edition.as_str()) {
            system.viewer_client.set_layer_visible(layer, true).await?;
        }
    }
    info!(
        loaded = metadata.fulfilled_count(),
        requested = metadata.len(),
        "Layers shown"
    );

    let span = tracing::info_span!("annotations");
    match system.manifest_client.load_annotations().instrument(span).await {
        Ok(pages) => info!(pages = pages.len(), "Annotations loaded"),
        Err(e) => warn!(error = %e, "Annotations unavailable"),
    }

    let size = system
        .timeline_client
        .animate_resize(240, 8, Easing::OutBounce)
        .await?;
    info!(size, "Timeline opened");

    system.shutdown().await?;

    info!("Viewer finished");
    Ok(())
}
