//! `waymark search`: run one procedure

use waymark_core::config::WaymarkConfig;
use waymark_core::heuristic::Heuristic;
use waymark_core::search::{run_variant, Guidance, Variant};

use crate::commands::dispatch::CommandContext;
use crate::commands::report::{self, SearchReport};
use waymark_core::error::Result;

pub fn execute(
    ctx: &CommandContext,
    variant: Variant,
    heuristic: Option<Heuristic>,
    weight: Option<f64>,
) -> Result<()> {
    let config = ctx.load_config()?;
    let graph = ctx.load_graph(&config)?;
    let opts = config.search_options();

    let guidance = resolve_guidance(&config, variant, heuristic, weight);
    let result = run_variant(&graph, &opts, variant, guidance)?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), found = result.is_some(), "search");

    report::output_search(ctx.cli, &SearchReport::new(variant, &opts, guidance, result))
}

/// Command-line heuristic and weight, falling back to the configured report
/// guidance; always `None` for uninformed variants
pub fn resolve_guidance(
    config: &WaymarkConfig,
    variant: Variant,
    heuristic: Option<Heuristic>,
    weight: Option<f64>,
) -> Option<Guidance> {
    let Some(defaults) = config.guidance_for(variant) else {
        if heuristic.is_some() || weight.is_some() {
            tracing::warn!(%variant, "ignoring --heuristic/--weight for a variant without a heuristic");
        }
        return None;
    };

    Some(Guidance::new(
        heuristic.unwrap_or(defaults.heuristic),
        weight.unwrap_or(defaults.weight),
    ))
}
