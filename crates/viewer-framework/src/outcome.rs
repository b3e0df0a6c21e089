//! # Outcomes and Result Maps
//!
//! A fetch settles into a [`FetchOutcome`]. Once every fetch of an
//! aggregation has settled, the outcomes are folded into a [`ResultMap`].
//!
//! ## Absence policy
//!
//! A key whose fetch was rejected stays in the map with an explicit absence
//! marker (`None`, serialized as `null`). A key that is missing from the map
//! was never requested. This lets consumers tell "not attempted" apart from
//! "attempted and failed".

use crate::error::FetchError;
use crate::key::ResourceKey;
use serde::Serialize;
use std::collections::BTreeMap;

/// Terminal state of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<D> {
    Fulfilled(D),
    Rejected(FetchError),
}

impl<D> FetchOutcome<D> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, FetchOutcome::Fulfilled(_))
    }

    pub fn into_result(self) -> Result<D, FetchError> {
        match self {
            FetchOutcome::Fulfilled(doc) => Ok(doc),
            FetchOutcome::Rejected(e) => Err(e),
        }
    }
}

impl<D> From<Result<D, FetchError>> for FetchOutcome<D> {
    fn from(result: Result<D, FetchError>) -> Self {
        match result {
            Ok(doc) => FetchOutcome::Fulfilled(doc),
            Err(e) => FetchOutcome::Rejected(e),
        }
    }
}

/// Mapping from requested key to its document, or to an absence marker when
/// the fetch failed.
///
/// Serializes as a JSON object, e.g. `{"a": {...}, "b": null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultMap<D> {
    entries: BTreeMap<ResourceKey, Option<D>>,
}

impl<D> Default for ResultMap<D> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<D> ResultMap<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, key: ResourceKey, outcome: FetchOutcome<D>) {
        let slot = match outcome {
            FetchOutcome::Fulfilled(doc) => Some(doc),
            FetchOutcome::Rejected(_) => None,
        };
        self.entries.insert(key, slot);
    }

    /// Number of keys present, fulfilled or absent.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The document fetched for `key`, if the fetch succeeded.
    pub fn get(&self, key: &str) -> Option<&D> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Whether `key` was part of the aggregation at all.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `key` was requested and its fetch failed.
    pub fn is_absent(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(None))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey, Option<&D>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_ref()))
    }

    pub fn fulfilled(&self) -> impl Iterator<Item = (&ResourceKey, &D)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|doc| (k, doc)))
    }

    pub fn absent(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| k)
    }

    pub fn fulfilled_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_some()).count()
    }

    /// Drops the absence markers, keeping only successful documents.
    pub fn into_fulfilled(self) -> BTreeMap<ResourceKey, D> {
        self.entries
            .into_iter()
            .filter_map(|(k, v)| v.map(|doc| (k, doc)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultMap<u32> {
        let mut map = ResultMap::new();
        map.record("a".into(), FetchOutcome::Fulfilled(1));
        map.record(
            "b".into(),
            FetchOutcome::Rejected(FetchError::Transport("network error".into())),
        );
        map
    }

    #[test]
    fn test_rejected_key_is_absent_not_missing() {
        let map = sample();
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
        assert!(map.is_absent("b"));
        assert!(!map.is_absent("a"));
        assert!(!map.contains_key("c"));
        assert!(!map.is_absent("c"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.fulfilled_count(), 1);
    }

    #[test]
    fn test_serializes_absence_as_null() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json, serde_json::json!({ "a": 1, "b": null }));
    }

    #[test]
    fn test_into_fulfilled_drops_absent() {
        let fulfilled = sample().into_fulfilled();
        assert_eq!(fulfilled.len(), 1);
        assert_eq!(fulfilled.get("a"), Some(&1));
    }

    #[test]
    fn test_outcome_from_result() {
        let ok: FetchOutcome<u8> = Ok(3).into();
        assert!(ok.is_fulfilled());
        let err: FetchOutcome<u8> = Err(FetchError::Parse("bad".into())).into();
        assert_eq!(err.into_result(), Err(FetchError::Parse("bad".into())));
    }
}
