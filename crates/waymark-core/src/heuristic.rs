//! Weighted distance estimates between node coordinates
//!
//! Every heuristic is linear in its weight, so a weight sweep scales the
//! estimate without changing its shape.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WaymarkError;
use crate::graph::Point;

/// Distance metric used to estimate the remaining distance to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Straight-line distance
    Euclidean,
    /// Sum of axis offsets
    Manhattan,
    /// Largest axis offset
    Chebyshev,
    /// Diagonal moves at √2, the remainder straight
    Octile,
}

impl Heuristic {
    /// All heuristics, in sweep order
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Euclidean,
        Heuristic::Manhattan,
        Heuristic::Chebyshev,
        Heuristic::Octile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Chebyshev => "chebyshev",
            Heuristic::Octile => "octile",
        }
    }

    /// Weighted estimate between two points; never negative for `weight >= 0`
    pub fn estimate(self, a: Point, b: Point, weight: f64) -> f64 {
        let (dx, dy) = a.offsets(&b);
        let distance = match self {
            Heuristic::Euclidean => (dx * dx + dy * dy).sqrt(),
            Heuristic::Manhattan => dx + dy,
            Heuristic::Chebyshev => dx.max(dy),
            Heuristic::Octile => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy),
        };
        weight * distance
    }
}

impl FromStr for Heuristic {
    type Err = WaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(Heuristic::Euclidean),
            "manhattan" => Ok(Heuristic::Manhattan),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            "octile" => Ok(Heuristic::Octile),
            other => Err(WaymarkError::unsupported(
                "heuristic",
                other,
                "euclidean, manhattan, chebyshev, octile",
            )),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
