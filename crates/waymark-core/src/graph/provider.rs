use super::types::{NodeId, Point};

/// Trait for providing adjacency, edge attributes and coordinates
///
/// Searches only read through this trait. Lookups for pairs that are not
/// edges return `None`.
pub trait GraphProvider {
    /// Outgoing neighbors in data-file order; empty for unknown nodes
    fn neighbors(&self, id: &str) -> &[NodeId];
    fn distance(&self, from: &str, to: &str) -> Option<f64>;
    fn cost(&self, from: &str, to: &str) -> Option<f64>;
    fn coordinate(&self, id: &str) -> Option<Point>;
}
