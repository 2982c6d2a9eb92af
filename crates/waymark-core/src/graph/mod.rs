//! Graph data and lookups used by the search engine
//!
//! - `types`: node identifiers, points, edge keys and edge tables
//! - `provider`: read-only lookup trait consumed by searches
//! - `data`: the in-memory graph loaded from JSON data files

pub mod data;
pub mod provider;
pub mod types;

pub use data::{GraphData, GraphDataBuilder};
pub use provider::GraphProvider;
pub use types::{EdgeKey, EdgeTable, NodeId, Point};
