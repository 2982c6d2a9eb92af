//! In-memory graph loaded once and shared by reference with every search

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;

use super::provider::GraphProvider;
use super::types::{EdgeKey, EdgeTable, NodeId, Point};
use crate::config::DataConfig;
use crate::error::{Result, WaymarkError};
use crate::trace_time;

/// Adjacency, edge distances, edge energy costs and node coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    distances: EdgeTable,
    costs: EdgeTable,
    coordinates: HashMap<NodeId, Point>,
}

impl GraphData {
    pub fn builder() -> GraphDataBuilder {
        GraphDataBuilder::default()
    }

    /// Load the four data files named by `files` from `dir`
    #[tracing::instrument(skip(files), fields(dir = %dir.display()))]
    pub fn load(dir: &Path, files: &DataConfig) -> Result<Self> {
        let start = Instant::now();

        let adjacency: HashMap<NodeId, Vec<NodeId>> = read_json(&dir.join(&files.graph))?;
        let distances = read_edge_table(&dir.join(&files.distances))?;
        let costs = read_edge_table(&dir.join(&files.costs))?;
        let coordinates: HashMap<NodeId, Point> = read_json(&dir.join(&files.coordinates))?;

        let data = GraphData {
            adjacency,
            distances,
            costs,
            coordinates,
        };

        tracing::debug!(
            nodes = data.node_count(),
            edges = data.edge_count(),
            distances = data.distances.len(),
            costs = data.costs.len(),
            coordinates = data.coordinates.len(),
            "graph_loaded"
        );
        trace_time!(start, "load_graph");

        Ok(data)
    }

    /// Number of nodes with an adjacency entry
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id) || self.coordinates.contains_key(id)
    }
}

impl GraphProvider for GraphData {
    fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn distance(&self, from: &str, to: &str) -> Option<f64> {
        self.distances.get(from, to)
    }

    fn cost(&self, from: &str, to: &str) -> Option<f64> {
        self.costs.get(from, to)
    }

    fn coordinate(&self, id: &str) -> Option<Point> {
        self.coordinates.get(id).copied()
    }
}

/// Builder for assembling a graph in memory
#[derive(Debug, Default)]
pub struct GraphDataBuilder {
    data: GraphData,
}

impl GraphDataBuilder {
    /// Add a node with its coordinate
    pub fn node(mut self, id: impl Into<NodeId>, point: Point) -> Self {
        let id = id.into();
        self.data.adjacency.entry(id.clone()).or_default();
        self.data.coordinates.insert(id, point);
        self
    }

    /// Add a directed edge with its distance and energy cost
    pub fn edge(
        mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        distance: f64,
        cost: f64,
    ) -> Self {
        let from = from.into();
        let to = to.into();
        self.data
            .distances
            .insert(EdgeKey::new(from.clone(), to.clone()), distance);
        self.data
            .costs
            .insert(EdgeKey::new(from.clone(), to.clone()), cost);
        self.data.adjacency.entry(to.clone()).or_default();
        self.data.adjacency.entry(from).or_default().push(to);
        self
    }

    /// Add the edge in both directions with the same attributes
    pub fn undirected_edge(
        self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        distance: f64,
        cost: f64,
    ) -> Self {
        let a = a.into();
        let b = b.into();
        self.edge(a.clone(), b.clone(), distance, cost)
            .edge(b, a, distance, cost)
    }

    pub fn build(self) -> GraphData {
        self.data
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(WaymarkError::DataFileMissing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| WaymarkError::invalid_data(path, e))
}

fn read_edge_table(path: &Path) -> Result<EdgeTable> {
    let raw: HashMap<String, f64> = read_json(path)?;
    EdgeTable::from_raw(raw).map_err(|e| WaymarkError::invalid_data(path, e))
}
