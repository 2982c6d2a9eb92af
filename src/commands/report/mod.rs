//! Rendering of search results and tuning reports
//!
//! Every command builds the same report values and hands them to the
//! renderer selected by `--format`.

pub mod human;
pub mod json;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use waymark_core::error::Result;
use waymark_core::graph::NodeId;
use waymark_core::search::{Guidance, SearchOptions, SearchResult, Variant};
use waymark_core::tuning::TuningReport;

/// One procedure run, reachable or not
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub variant: Variant,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Guidance>,
    /// `null` when the target is unreachable
    pub result: Option<SearchResult>,
}

impl SearchReport {
    pub fn new(
        variant: Variant,
        opts: &SearchOptions,
        guidance: Option<Guidance>,
        result: Option<SearchResult>,
    ) -> Self {
        SearchReport {
            variant,
            source: opts.source.clone(),
            target: opts.target.clone(),
            guidance,
            result,
        }
    }
}

/// Reference search paired with the weight sweep run against it
#[derive(Debug, Clone, Serialize)]
pub struct TuneReport {
    pub reference: SearchReport,
    pub tuning: TuningReport,
}

/// Print a single search report
pub fn output_search(cli: &Cli, report: &SearchReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            human::print_search(report);
            Ok(())
        }
        OutputFormat::Json => json::print(report),
    }
}

/// Print a reference search followed by its tuning sweep
pub fn output_tune(cli: &Cli, report: &TuneReport) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                human::print_search(&report.reference);
            }
            human::print_tuning(&report.tuning);
            Ok(())
        }
        OutputFormat::Json => json::print(report),
    }
}

/// Print the full report: every procedure, then every tuning sweep
pub fn output_run(cli: &Cli, searches: &[SearchReport], tunings: &[TuningReport]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for report in searches {
                human::print_search(report);
            }
            for tuning in tunings {
                human::print_tuning(tuning);
            }
            Ok(())
        }
        OutputFormat::Json => json::print(&serde_json::json!({
            "searches": searches,
            "tuning": tunings,
        })),
    }
}
