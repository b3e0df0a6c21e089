//! The Waterstaatskaart editions the viewer knows about, and the resource
//! sets derived from them.

use super::layer::LayerId;
use viewer_framework::{AggregateError, ResourceSet};

/// Number of editions with a metadata file and a warped-map layer.
pub const METADATA_EDITION_COUNT: u32 = 5;

/// IIIF manifests served next to the viewer, one per sheet of 1874.
pub const MANIFEST_FILES: [&str; 9] = [
    "modified_01-1874-389916.json",
    "modified_02-1874-456650.json",
    "modified_03-1874-455650.json",
    "modified_04-1874-456550.json",
    "modified_05-1874-456551.json",
    "modified_06-1874-456552.json",
    "modified_07-1874-456588.json",
    "modified_08-1874-456553.json",
    "modified_09-1874-456827.json",
];

/// `editie-1` .. `editie-5`.
pub fn metadata_editions() -> Vec<String> {
    (1..=METADATA_EDITION_COUNT)
        .map(|n| format!("editie-{n}"))
        .collect()
}

/// The nine annotated editions, each reprint (`bis`) right after the edition
/// it reprints: `editie_1, editie_1bis, editie_2, ..., editie_4bis, editie_5`.
pub fn annotation_editions() -> Vec<String> {
    (0..9)
        .map(|i| {
            let number = i / 2 + 1;
            let suffix = if i % 2 == 1 { "bis" } else { "" };
            format!("editie_{number}{suffix}")
        })
        .collect()
}

/// Layer shown for a metadata edition key (`editie-3` -> layer 3).
pub fn layer_for_edition(edition: &str) -> Option<LayerId> {
    edition
        .strip_prefix("editie-")
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n > 0)
        .map(LayerId)
}

/// Resource sets for everything the viewer fetches at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct EditionCatalog {
    metadata: ResourceSet,
    annotations: ResourceSet,
    manifests: ResourceSet,
}

impl EditionCatalog {
    /// Catalog with the given metadata editions and the fixed annotation and
    /// manifest lists.
    pub fn new<I, K>(metadata_editions: I) -> Result<Self, AggregateError>
    where
        I: IntoIterator<Item = K>,
        K: Into<viewer_framework::ResourceKey>,
    {
        Ok(Self {
            metadata: ResourceSet::new(metadata_editions)?,
            annotations: ResourceSet::new(annotation_editions())?,
            manifests: ResourceSet::new(MANIFEST_FILES)?,
        })
    }

    pub fn metadata(&self) -> &ResourceSet {
        &self.metadata
    }

    pub fn annotations(&self) -> &ResourceSet {
        &self.annotations
    }

    pub fn manifests(&self) -> &ResourceSet {
        &self.manifests
    }

    /// One layer per metadata edition that maps to a layer number.
    pub fn layers(&self) -> Vec<LayerId> {
        self.metadata
            .iter()
            .filter_map(|key| layer_for_edition(key.as_str()))
            .collect()
    }
}

impl Default for EditionCatalog {
    fn default() -> Self {
        Self {
            metadata: ResourceSet::new(metadata_editions()).unwrap_or_default(),
            annotations: ResourceSet::new(annotation_editions()).unwrap_or_default(),
            manifests: ResourceSet::new(MANIFEST_FILES).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_editions_interleave_reprints() {
        assert_eq!(
            annotation_editions(),
            vec![
                "editie_1",
                "editie_1bis",
                "editie_2",
                "editie_2bis",
                "editie_3",
                "editie_3bis",
                "editie_4",
                "editie_4bis",
                "editie_5",
            ]
        );
    }

    #[test]
    fn test_metadata_editions() {
        assert_eq!(
            metadata_editions(),
            vec!["editie-1", "editie-2", "editie-3", "editie-4", "editie-5"]
        );
    }

    #[test]
    fn test_layer_for_edition() {
        assert_eq!(layer_for_edition("editie-4"), Some(LayerId(4)));
        assert_eq!(layer_for_edition("editie-0"), None);
        assert_eq!(layer_for_edition("editie_1bis"), None);
        assert_eq!(layer_for_edition("kaart-1"), None);
    }

    #[test]
    fn test_default_catalog() {
        let catalog = EditionCatalog::default();
        assert_eq!(catalog.metadata().len(), 5);
        assert_eq!(catalog.annotations().len(), 9);
        assert_eq!(catalog.manifests().len(), 9);
        assert_eq!(
            catalog.layers(),
            (1..=5).map(LayerId).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_catalog_rejects_duplicate_editions() {
        let err = EditionCatalog::new(["editie-1", "editie-1"]).unwrap_err();
        assert_eq!(err, AggregateError::DuplicateKey("editie-1".into()));
    }
}
