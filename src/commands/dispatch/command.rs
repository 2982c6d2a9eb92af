//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use waymark_core::config::WaymarkConfig;
use waymark_core::error::Result;
use waymark_core::graph::GraphData;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub data_dir: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, data_dir: &'a Path, start: Instant) -> Self {
        Self {
            cli,
            data_dir,
            start,
        }
    }

    /// Effective configuration: file (or defaults) with CLI overrides applied
    pub fn load_config(&self) -> Result<WaymarkConfig> {
        let mut config = WaymarkConfig::discover(self.data_dir, self.cli.config.as_deref())?;

        if let Some(source) = &self.cli.source {
            config.search.source = source.clone();
        }
        if let Some(target) = &self.cli.target {
            config.search.target = target.clone();
        }
        if let Some(budget) = self.cli.budget {
            config.search.energy_budget = budget;
        }
        config.validate()?;

        tracing::debug!(elapsed = ?self.start.elapsed(), "load_config");
        Ok(config)
    }

    pub fn load_graph(&self, config: &WaymarkConfig) -> Result<GraphData> {
        let graph = GraphData::load(self.data_dir, &config.data)?;
        for endpoint in [&config.search.source, &config.search.target] {
            if !graph.contains(endpoint) {
                tracing::warn!(node = %endpoint, "node does not appear in the graph data");
            }
        }
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waymark {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Best-first route search with heuristic weight tuning.");
        println!();
        println!("Run `waymark --help` for usage information.");
        Ok(())
    }
}
