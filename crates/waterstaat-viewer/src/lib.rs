//! # Waterstaatskaart Viewer
//!
//! Data and state layer of a viewer for the historical Waterstaatskaart
//! editions.
//!
//! - **[clients]**: HTTP fetching of metadata, annotations and manifests, and
//!   typed clients for the two state stores.
//! - **[model]**: the edition catalog and the plain state values.
//! - **[viewer_store]** / **[timeline_store]**: how those states change.
//! - **[easing]**: interpolation curves for animated transitions.
//! - **[lifecycle]**: starting and stopping the whole system.
//!
//! Aggregation itself lives in [`viewer_framework`].

pub mod clients;
pub mod config;
pub mod easing;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod timeline_store;
pub mod viewer_store;
