//! CLI argument parsing for waymark
//!
//! Global flags: --data, --config, --source, --target, --budget, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod commands;
pub mod output;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use output::OutputFormat;
use parse::parse_non_negative;

/// Waymark - best-first route search with heuristic weight tuning
#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding G.json, Dist.json, Cost.json and Coord.json
    #[arg(long, global = true, env = "WAYMARK_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file (default: waymark.toml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start node (overrides [search] source)
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Goal node (overrides [search] target)
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Energy budget for budget variants (overrides [search] energy_budget)
    #[arg(long, global = true, value_parser = parse_non_negative)]
    pub budget: Option<f64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. trace, waymark_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
