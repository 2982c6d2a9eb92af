use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaymarkError;

/// Opaque node label as it appears in the data files
pub type NodeId = String;

/// Integer 2D coordinate of a node, stored on disk as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Absolute per-axis offsets to another point
    pub fn offsets(&self, other: &Point) -> (f64, f64) {
        (
            self.x.abs_diff(other.x) as f64,
            self.y.abs_diff(other.y) as f64,
        )
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for [i64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Ordered node pair, written `"from,to"` in the distance and cost files
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeKey {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        EdgeKey {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl FromStr for EdgeKey {
    type Err = WaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(EdgeKey::new(from, to)),
            _ => Err(WaymarkError::invalid_value("edge key", s)),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}

/// Per-edge scalar attribute (distance or energy cost), nested by endpoint
/// so lookups borrow both identifiers instead of building a key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeTable {
    values: HashMap<NodeId, HashMap<NodeId, f64>>,
    len: usize,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: EdgeKey, value: f64) {
        let previous = self.values.entry(key.from).or_default().insert(key.to, value);
        if previous.is_none() {
            self.len += 1;
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.values.get(from)?.get(to).copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Build a table from the raw `"from,to" -> value` map of a data file
    pub fn from_raw(raw: HashMap<String, f64>) -> Result<Self, WaymarkError> {
        let mut table = EdgeTable::new();
        for (key, value) in raw {
            table.insert(key.parse()?, value);
        }
        Ok(table)
    }
}
