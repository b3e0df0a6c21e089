//! # Domain Model
//!
//! Plain data: the edition catalog, identifiers, and the two UI state
//! values. How the states change lives with their stores
//! ([`viewer_store`](crate::viewer_store), [`timeline_store`](crate::timeline_store)).

pub mod edition;
pub mod layer;
pub mod timeline;
pub mod viewer;

pub use edition::*;
pub use layer::*;
pub use timeline::*;
pub use viewer::*;
