//! `waymark run`: every procedure, then every tuning sweep

use waymark_core::error::Result;
use waymark_core::search::{run_variant, Variant};
use waymark_core::tuning::tune_weights;

use crate::commands::dispatch::CommandContext;
use crate::commands::report::{self, SearchReport};

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;
    let graph = ctx.load_graph(&config)?;
    let opts = config.search_options();
    let tuning_options = config.tuning_options();

    let mut searches = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        let guidance = config.guidance_for(variant);
        let result = run_variant(&graph, &opts, variant, guidance)?;
        searches.push(SearchReport::new(variant, &opts, guidance, result));
    }

    // references come from the uninformed runs above
    let mut tunings = Vec::new();
    for variant in Variant::ALL.into_iter().filter(|v| v.is_informed()) {
        let reference = variant.reference().and_then(|reference| {
            searches
                .iter()
                .find(|report| report.variant == reference)
                .and_then(|report| report.result.as_ref())
        });

        match reference {
            Some(reference) => {
                tunings.push(tune_weights(&graph, &opts, variant, reference, &tuning_options)?)
            }
            None => tracing::warn!(%variant, "skipping weight tuning: reference found no path"),
        }
    }

    tracing::debug!(elapsed = ?ctx.start.elapsed(), "run");

    report::output_run(ctx.cli, &searches, &tunings)
}
