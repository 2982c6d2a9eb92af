//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::heuristic::Heuristic;
use crate::search::Guidance;

/// Configuration file looked up in the data directory
pub const CONFIG_FILE_NAME: &str = "waymark.toml";

pub const DEFAULT_SOURCE: &str = "1";
pub const DEFAULT_TARGET: &str = "50";
pub const DEFAULT_ENERGY_BUDGET: f64 = 287_932.0;
pub const DEFAULT_ENERGY_WEIGHT: f64 = 0.1;
pub const DEFAULT_TUNING_STEPS: u32 = 100;

/// Top-level waymark configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaymarkConfig {
    /// Endpoints, budget and energy blend factor
    #[serde(default)]
    pub search: SearchConfig,

    /// Data file names
    #[serde(default)]
    pub data: DataConfig,

    /// Weight sweep settings
    #[serde(default)]
    pub tuning: TuningConfig,

    /// Heuristic and weight per informed variant for the full report
    #[serde(default)]
    pub report: ReportConfig,
}

/// Search endpoints and energy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_target")]
    pub target: String,

    /// Ceiling on cumulative energy for budget variants
    #[serde(default = "default_energy_budget")]
    pub energy_budget: f64,

    /// Energy factor in the energy-weighted priority (default 0.1)
    #[serde(default = "default_energy_weight")]
    pub energy_weight: f64,
}

/// Names of the data files, relative to the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Adjacency: node -> [neighbor, ...]
    #[serde(default = "default_graph_file")]
    pub graph: String,

    /// Edge distances: "from,to" -> number
    #[serde(default = "default_distances_file")]
    pub distances: String,

    /// Edge energy costs: "from,to" -> number
    #[serde(default = "default_costs_file")]
    pub costs: String,

    /// Node coordinates: node -> [x, y]
    #[serde(default = "default_coordinates_file")]
    pub coordinates: String,
}

/// Weight sweep configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Number of weights swept from 1.0 down to 1/steps
    #[serde(default = "default_tuning_steps")]
    pub steps: u32,

    #[serde(default = "default_tuning_heuristics")]
    pub heuristics: Vec<Heuristic>,
}

/// Guidance used by `run` and as the `search` default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_astar_guidance")]
    pub astar: Guidance,

    #[serde(default = "default_budget_astar_guidance")]
    pub budget_astar: Guidance,

    #[serde(default = "default_budget_astar_alt_guidance")]
    pub budget_astar_alt: Guidance,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_energy_budget() -> f64 {
    DEFAULT_ENERGY_BUDGET
}

fn default_energy_weight() -> f64 {
    DEFAULT_ENERGY_WEIGHT
}

fn default_graph_file() -> String {
    "G.json".to_string()
}

fn default_distances_file() -> String {
    "Dist.json".to_string()
}

fn default_costs_file() -> String {
    "Cost.json".to_string()
}

fn default_coordinates_file() -> String {
    "Coord.json".to_string()
}

fn default_tuning_steps() -> u32 {
    DEFAULT_TUNING_STEPS
}

fn default_tuning_heuristics() -> Vec<Heuristic> {
    Heuristic::ALL.to_vec()
}

fn default_astar_guidance() -> Guidance {
    Guidance::new(Heuristic::Octile, 1.0)
}

fn default_budget_astar_guidance() -> Guidance {
    Guidance::new(Heuristic::Manhattan, 0.76)
}

fn default_budget_astar_alt_guidance() -> Guidance {
    Guidance::new(Heuristic::Manhattan, 0.89)
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            energy_budget: default_energy_budget(),
            energy_weight: default_energy_weight(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            graph: default_graph_file(),
            distances: default_distances_file(),
            costs: default_costs_file(),
            coordinates: default_coordinates_file(),
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            steps: default_tuning_steps(),
            heuristics: default_tuning_heuristics(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            astar: default_astar_guidance(),
            budget_astar: default_budget_astar_guidance(),
            budget_astar_alt: default_budget_astar_alt_guidance(),
        }
    }
}
