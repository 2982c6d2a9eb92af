use std::cmp::Ordering;

use super::types::{Costs, SearchOptions, Variant};

/// Cost dimension a variant uses to decide whether a neighbor improved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostDimension {
    Distance,
    Energy,
}

impl CostDimension {
    pub fn of(self, costs: Costs) -> f64 {
        match self {
            CostDimension::Distance => costs.distance,
            CostDimension::Energy => costs.energy,
        }
    }
}

/// Components of the queue priority, compared lexicographically
///
/// `g` is accumulated distance, `e` accumulated energy, `h` the heuristic
/// estimate from the neighbor to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriorityLayout {
    /// `(g)`
    Distance,
    /// `(g + h)`
    Estimate,
    /// `(g, e)`
    DistanceThenEnergy,
    /// `(g + h, e, g)`
    EstimateThenEnergyThenDistance,
    /// `(g + h, e)`
    EstimateThenEnergy,
    /// `(g + factor * e)`
    EnergyBlend(f64),
}

impl PriorityLayout {
    pub fn compose(self, costs: Costs, estimate: f64) -> PriorityKey {
        let Costs { distance, energy } = costs;
        match self {
            PriorityLayout::Distance => PriorityKey::new([distance, 0.0, 0.0]),
            PriorityLayout::Estimate => PriorityKey::new([distance + estimate, 0.0, 0.0]),
            PriorityLayout::DistanceThenEnergy => PriorityKey::new([distance, energy, 0.0]),
            PriorityLayout::EstimateThenEnergyThenDistance => {
                PriorityKey::new([distance + estimate, energy, distance])
            }
            PriorityLayout::EstimateThenEnergy => {
                PriorityKey::new([distance + estimate, energy, 0.0])
            }
            PriorityLayout::EnergyBlend(factor) => {
                PriorityKey::new([distance + factor * energy, 0.0, 0.0])
            }
        }
    }
}

/// Lexicographic priority; unused trailing components stay zero so they
/// never decide an ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityKey([f64; 3]);

impl PriorityKey {
    pub const ZERO: PriorityKey = PriorityKey([0.0; 3]);

    pub fn new(components: [f64; 3]) -> Self {
        PriorityKey(components)
    }

    pub fn components(&self) -> [f64; 3] {
        self.0
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Everything that distinguishes one procedure from another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchPolicy {
    pub layout: PriorityLayout,
    /// Dimension recorded in the best-known-cost table
    pub relax_on: CostDimension,
    /// Energy ceiling; neighbors beyond it are never pushed
    pub budget: Option<f64>,
    /// Skip (and do not count) pops of already finalized nodes
    pub closed_set: bool,
    /// Look up edge energy and report it in the result
    pub tracks_energy: bool,
}

impl SearchPolicy {
    pub fn for_variant(variant: Variant, opts: &SearchOptions) -> Self {
        match variant {
            Variant::Ucs => SearchPolicy {
                layout: PriorityLayout::Distance,
                relax_on: CostDimension::Distance,
                budget: None,
                closed_set: true,
                tracks_energy: false,
            },
            Variant::AStar => SearchPolicy {
                layout: PriorityLayout::Estimate,
                relax_on: CostDimension::Distance,
                budget: None,
                closed_set: true,
                tracks_energy: false,
            },
            Variant::BudgetUcs => SearchPolicy {
                layout: PriorityLayout::DistanceThenEnergy,
                relax_on: CostDimension::Energy,
                budget: Some(opts.energy_budget),
                closed_set: false,
                tracks_energy: true,
            },
            Variant::BudgetAStar => SearchPolicy {
                layout: PriorityLayout::EstimateThenEnergyThenDistance,
                relax_on: CostDimension::Energy,
                budget: Some(opts.energy_budget),
                closed_set: false,
                tracks_energy: true,
            },
            Variant::BudgetAStarAlt => SearchPolicy {
                layout: PriorityLayout::EstimateThenEnergy,
                relax_on: CostDimension::Distance,
                budget: Some(opts.energy_budget),
                closed_set: false,
                tracks_energy: true,
            },
            Variant::EnergyWeightedUcs => SearchPolicy {
                layout: PriorityLayout::EnergyBlend(opts.energy_weight),
                relax_on: CostDimension::Distance,
                budget: None,
                closed_set: true,
                tracks_energy: true,
            },
        }
    }

    pub fn within_budget(&self, costs: Costs) -> bool {
        self.budget.map_or(true, |budget| costs.energy <= budget)
    }
}
