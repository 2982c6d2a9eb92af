//! Best-first search over a `GraphProvider`
//!
//! One engine serves every procedure:
//! - `types`: options, guidance, variants and results
//! - `policy`: how a variant orders, relaxes, constrains and closes nodes
//! - `engine`: the priority-queue loop shared by all variants
//! - `procedures`: one entry point per variant

pub mod engine;
pub mod policy;
pub mod procedures;
pub mod types;

pub use engine::best_first_search;
pub use policy::{CostDimension, PriorityLayout, SearchPolicy};
pub use procedures::{
    astar_search, budget_astar_alt_search, budget_astar_search, budget_uniform_cost_search,
    energy_weighted_search, run_variant, uniform_cost_search,
};
pub use types::{Costs, Guidance, SearchOptions, SearchResult, Variant};
