//! `waymark tune`: weight sweep for one A* variant

use waymark_core::bail_invalid;
use waymark_core::error::Result;
use waymark_core::heuristic::Heuristic;
use waymark_core::search::Variant;
use waymark_core::tuning::tune_variant;

use crate::commands::dispatch::CommandContext;
use crate::commands::report::{self, SearchReport, TuneReport};

pub fn execute(
    ctx: &CommandContext,
    variant: Variant,
    heuristics: &[Heuristic],
    steps: Option<u32>,
) -> Result<()> {
    let config = ctx.load_config()?;

    let mut options = config.tuning_options();
    if !heuristics.is_empty() {
        options.heuristics = heuristics.to_vec();
    }
    if let Some(steps) = steps {
        if steps == 0 {
            bail_invalid!("--steps", "0 (must be at least 1)");
        }
        options.steps = steps;
    }

    let graph = ctx.load_graph(&config)?;
    let opts = config.search_options();

    let (reference, tuning) = tune_variant(&graph, &opts, variant, &options)?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "tune");

    let reference_variant = variant.reference().unwrap_or(variant);
    report::output_tune(
        ctx.cli,
        &TuneReport {
            reference: SearchReport::new(reference_variant, &opts, None, Some(reference)),
            tuning,
        },
    )
}
