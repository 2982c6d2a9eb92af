//! Top-level waymark commands and their arguments

use clap::{Args, Subcommand};

use crate::cli::parse::{parse_heuristic, parse_non_negative, parse_variant};
use waymark_core::heuristic::Heuristic;
use waymark_core::search::Variant;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search procedure and print its result
    Search(SearchArgs),

    /// Sweep heuristic weights for an A* variant against its reference
    Tune(TuneArgs),

    /// Run every procedure, then tune the three A* variants
    Run,

    /// Show the effective configuration or write it to the data directory
    Config(ConfigArgs),
}

/// Arguments for the search command.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Procedure: ucs, astar, budget-ucs, budget-astar, budget-astar-alt,
    /// energy-weighted-ucs
    #[arg(value_parser = parse_variant)]
    pub variant: Variant,

    /// Heuristic for A* variants (default from [report])
    #[arg(long, short = 'H', value_parser = parse_heuristic)]
    pub heuristic: Option<Heuristic>,

    /// Heuristic weight for A* variants (default from [report])
    #[arg(long, short, value_parser = parse_non_negative)]
    pub weight: Option<f64>,
}

/// Arguments for the tune command.
#[derive(Args, Debug)]
pub struct TuneArgs {
    /// A* variant to tune: astar, budget-astar, budget-astar-alt
    #[arg(value_parser = parse_variant)]
    pub variant: Variant,

    /// Restrict the sweep to one heuristic (repeatable)
    #[arg(long, short = 'H', value_parser = parse_heuristic, action = clap::ArgAction::Append)]
    pub heuristic: Vec<Heuristic>,

    /// Number of weights to sweep (overrides [tuning] steps)
    #[arg(long)]
    pub steps: Option<u32>,
}

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the effective configuration to waymark.toml in the data directory
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing waymark.toml
    #[arg(long, requires = "init")]
    pub force: bool,
}
