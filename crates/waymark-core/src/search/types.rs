use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_ENERGY_BUDGET, DEFAULT_ENERGY_WEIGHT, DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::error::WaymarkError;
use crate::graph::NodeId;
use crate::heuristic::Heuristic;

/// Endpoints and energy parameters shared by every procedure
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub source: NodeId,
    pub target: NodeId,
    /// Ceiling on cumulative energy for budget variants
    pub energy_budget: f64,
    /// Energy factor in the energy-weighted priority
    pub energy_weight: f64,
}

impl SearchOptions {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        SearchOptions {
            source: source.into(),
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_budget(mut self, energy_budget: f64) -> Self {
        self.energy_budget = energy_budget;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            source: DEFAULT_SOURCE.to_string(),
            target: DEFAULT_TARGET.to_string(),
            energy_budget: DEFAULT_ENERGY_BUDGET,
            energy_weight: DEFAULT_ENERGY_WEIGHT,
        }
    }
}

/// Heuristic plus the weight applied to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub heuristic: Heuristic,
    pub weight: f64,
}

impl Guidance {
    pub const fn new(heuristic: Heuristic, weight: f64) -> Self {
        Guidance { heuristic, weight }
    }
}

/// Accumulated cost along a partial path
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Costs {
    pub distance: f64,
    pub energy: f64,
}

/// Outcome of a search that reached the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Source to target, both inclusive
    pub path: Vec<NodeId>,
    pub distance: f64,
    /// Nodes popped from the queue (see `Variant` for what counts)
    pub expanded: usize,
    /// Accumulated energy; `None` for distance-only variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

/// The six search procedures
///
/// Closed-set variants (`Ucs`, `AStar`, `EnergyWeightedUcs`) count each node
/// at most once in `expanded`. The budget variants keep no closed set and
/// count every pop, including stale re-pops of an already relaxed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "ucs")]
    Ucs,
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "budget-ucs")]
    BudgetUcs,
    #[serde(rename = "budget-astar")]
    BudgetAStar,
    #[serde(rename = "budget-astar-alt")]
    BudgetAStarAlt,
    /// Orders by `distance + energy_weight * energy`. Distance and energy are
    /// summed along each record's own path, so the reported distance always
    /// belongs to the returned path.
    #[serde(rename = "energy-weighted-ucs")]
    EnergyWeightedUcs,
}

impl Variant {
    /// All variants, in report order
    pub const ALL: [Variant; 6] = [
        Variant::Ucs,
        Variant::AStar,
        Variant::BudgetUcs,
        Variant::BudgetAStar,
        Variant::BudgetAStarAlt,
        Variant::EnergyWeightedUcs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Ucs => "ucs",
            Variant::AStar => "astar",
            Variant::BudgetUcs => "budget-ucs",
            Variant::BudgetAStar => "budget-astar",
            Variant::BudgetAStarAlt => "budget-astar-alt",
            Variant::EnergyWeightedUcs => "energy-weighted-ucs",
        }
    }

    /// Whether the variant needs a heuristic
    pub fn is_informed(self) -> bool {
        matches!(
            self,
            Variant::AStar | Variant::BudgetAStar | Variant::BudgetAStarAlt
        )
    }

    pub fn is_budgeted(self) -> bool {
        matches!(
            self,
            Variant::BudgetUcs | Variant::BudgetAStar | Variant::BudgetAStarAlt
        )
    }

    /// Uninformed variant whose result a weight sweep must reproduce
    pub fn reference(self) -> Option<Variant> {
        match self {
            Variant::AStar => Some(Variant::Ucs),
            Variant::BudgetAStar | Variant::BudgetAStarAlt => Some(Variant::BudgetUcs),
            Variant::Ucs | Variant::BudgetUcs | Variant::EnergyWeightedUcs => None,
        }
    }
}

impl FromStr for Variant {
    type Err = WaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == lowered)
            .ok_or_else(|| {
                let supported = Variant::ALL.map(Variant::name).join(", ");
                WaymarkError::unsupported("variant", s, supported)
            })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
