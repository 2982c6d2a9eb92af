//! Heuristic weight tuning
//!
//! For an informed variant, sweep the heuristic weight from 1.0 down towards
//! zero and keep the weight that expands the fewest nodes while still
//! matching the distance of an uninformed reference search.

use std::time::Instant;

use serde::Serialize;

use crate::bail_usage;
use crate::config::DEFAULT_TUNING_STEPS;
use crate::error::{Result, WaymarkError};
use crate::graph::GraphProvider;
use crate::heuristic::Heuristic;
use crate::search::{run_variant, Guidance, SearchOptions, SearchResult, Variant};
use crate::trace_time;

/// Sweep resolution and the heuristics to try
#[derive(Debug, Clone, PartialEq)]
pub struct TuningOptions {
    /// Weights run `steps/steps, (steps-1)/steps, ..., 1/steps`
    pub steps: u32,
    pub heuristics: Vec<Heuristic>,
}

impl Default for TuningOptions {
    fn default() -> Self {
        TuningOptions {
            steps: DEFAULT_TUNING_STEPS,
            heuristics: Heuristic::ALL.to_vec(),
        }
    }
}

impl TuningOptions {
    /// Candidate weights, largest first
    pub fn weights(&self) -> impl Iterator<Item = f64> {
        let steps = self.steps;
        (1..=steps).rev().map(move |i| f64::from(i) / f64::from(steps))
    }
}

/// Best weight found for one heuristic
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TuningOutcome {
    Admissible {
        expanded: usize,
        weight: f64,
        /// `1 - expanded / reference_expanded`
        reduction: f64,
    },
    /// No weight reproduced the reference distance
    NotAdmissible,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicTuning {
    pub heuristic: Heuristic,
    #[serde(flatten)]
    pub outcome: TuningOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuningReport {
    pub variant: Variant,
    pub reference_distance: f64,
    pub reference_expanded: usize,
    pub results: Vec<HeuristicTuning>,
}

/// Whole-number part of a distance; tuning accepts a weight when this matches
fn truncated(distance: f64) -> f64 {
    distance.trunc()
}

/// Sweep weights for every configured heuristic against `reference`
///
/// Ties on expansion count keep the earlier (larger) weight.
#[tracing::instrument(skip(provider, opts, reference, options), fields(variant = %variant, steps = options.steps))]
pub fn tune_weights(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    variant: Variant,
    reference: &SearchResult,
    options: &TuningOptions,
) -> Result<TuningReport> {
    if !variant.is_informed() {
        bail_usage!(format!("{} has no heuristic weight to tune", variant));
    }

    let start = Instant::now();
    let target = truncated(reference.distance);
    let mut results = Vec::with_capacity(options.heuristics.len());

    for &heuristic in &options.heuristics {
        let mut best: Option<(usize, f64)> = None;

        for weight in options.weights() {
            let guidance = Guidance::new(heuristic, weight);
            let Some(result) = run_variant(provider, opts, variant, Some(guidance))? else {
                continue;
            };
            if truncated(result.distance) != target {
                continue;
            }
            if best.map_or(true, |(expanded, _)| result.expanded < expanded) {
                tracing::debug!(%heuristic, weight, expanded = result.expanded, "improved");
                best = Some((result.expanded, weight));
            }
        }

        let outcome = match best {
            Some((expanded, weight)) => TuningOutcome::Admissible {
                expanded,
                weight,
                reduction: reduction(expanded, reference.expanded),
            },
            None => TuningOutcome::NotAdmissible,
        };
        tracing::info!(%heuristic, ?outcome, "tuned");
        results.push(HeuristicTuning { heuristic, outcome });
    }

    trace_time!(start, "tune_weights", variant = variant.name());

    Ok(TuningReport {
        variant,
        reference_distance: reference.distance,
        reference_expanded: reference.expanded,
        results,
    })
}

/// Run the reference variant, then tune `variant` against it
pub fn tune_variant(
    provider: &dyn GraphProvider,
    opts: &SearchOptions,
    variant: Variant,
    options: &TuningOptions,
) -> Result<(SearchResult, TuningReport)> {
    let Some(reference_variant) = variant.reference() else {
        bail_usage!(format!("{} has no heuristic weight to tune", variant));
    };

    let reference = run_variant(provider, opts, reference_variant, None)?.ok_or_else(|| {
        WaymarkError::ReferenceUnreachable {
            variant: reference_variant.to_string(),
            source_id: opts.source.clone(),
            target_id: opts.target.clone(),
        }
    })?;

    let report = tune_weights(provider, opts, variant, &reference, options)?;
    Ok((reference, report))
}

fn reduction(expanded: usize, reference_expanded: usize) -> f64 {
    if reference_expanded == 0 {
        return 0.0;
    }
    1.0 - expanded as f64 / reference_expanded as f64
}
