use super::engine::best_first_search;
use super::policy::SearchPolicy;
use super::types::{Guidance, SearchOptions, SearchResult, Variant};
use crate::bail_usage;
use crate::error::Result;
use crate::graph::GraphProvider;

/// Plain uniform-cost search ordered by accumulated distance
pub fn uniform_cost_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::Ucs, None)
}

/// A* ordered by `distance + weight * heuristic`
pub fn astar_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    guidance: Guidance,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::AStar, Some(guidance))
}

/// Uniform-cost search that never exceeds `opts.energy_budget`
///
/// Relaxes on energy: a node is re-pushed whenever it is reached with less
/// energy, even along a longer route.
pub fn budget_uniform_cost_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::BudgetUcs, None)
}

/// Budgeted A* relaxing on energy
pub fn budget_astar_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    guidance: Guidance,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::BudgetAStar, Some(guidance))
}

/// Budgeted A* relaxing on distance
///
/// Can miss feasible paths: a shorter but energy-hungrier route to a node
/// blocks a cheaper one that would have stayed within budget.
pub fn budget_astar_alt_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    guidance: Guidance,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::BudgetAStarAlt, Some(guidance))
}

/// Uniform-cost search on `distance + opts.energy_weight * energy`
pub fn energy_weighted_search(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
) -> Result<Option<SearchResult>> {
    run_variant(provider, opts, Variant::EnergyWeightedUcs, None)
}

/// Run any variant by name
///
/// Informed variants require `guidance`; uninformed ones ignore it.
#[tracing::instrument(level = "debug", skip(provider, opts, guidance), fields(variant = %variant, source = %opts.source, target = %opts.target))]
pub fn run_variant(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    variant: Variant,
    guidance: Option<Guidance>,
) -> Result<Option<SearchResult>> {
    let guidance = if variant.is_informed() {
        match guidance {
            Some(guidance) => Some(guidance),
            None => bail_usage!(format!("{} requires a heuristic and weight", variant)),
        }
    } else {
        None
    };

    let policy = SearchPolicy::for_variant(variant, opts);
    best_first_search(provider, opts, &policy, guidance)
}
