//! # Resource Keys
//!
//! [`ResourceKey`] names one fetchable document, [`ResourceSet`] is the
//! ordered, duplicate-free list of keys handed to an aggregator.

use crate::error::AggregateError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::Display;

/// Opaque identifier of one resource (e.g. an edition name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ResourceKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ResourceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of unique, non-empty keys.
///
/// The order is the order in which fetches are issued. It has no influence
/// on the content of a [`ResultMap`](crate::ResultMap).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    keys: Vec<ResourceKey>,
}

impl ResourceSet {
    /// Builds a set, rejecting empty and duplicate keys.
    ///
    /// # Errors
    ///
    /// - [`AggregateError::EmptyKey`] if any key is the empty string
    /// - [`AggregateError::DuplicateKey`] for the first repeated key
    pub fn new<I, K>(keys: I) -> Result<Self, AggregateError>
    where
        I: IntoIterator<Item = K>,
        K: Into<ResourceKey>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for key in keys {
            let key = key.into();
            if key.as_str().is_empty() {
                return Err(AggregateError::EmptyKey);
            }
            if !seen.insert(key.clone()) {
                return Err(AggregateError::DuplicateKey(key));
            }
            ordered.push(key);
        }
        Ok(Self { keys: ordered })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.as_str() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResourceKey> {
        self.keys.iter()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a ResourceKey;
    type IntoIter = std::slice::Iter<'a, ResourceKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
