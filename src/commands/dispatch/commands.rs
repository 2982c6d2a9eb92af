//! Command implementations for all waymark commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use waymark_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::commands::{ConfigArgs, SearchArgs, TuneArgs};
    use crate::commands::{config, run, search, tune};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Search(args) => execute_search(ctx, args),
            Commands::Tune(args) => execute_tune(ctx, args),
            Commands::Run => run::execute(ctx),
            Commands::Config(args) => execute_config(ctx, args),
        }
    }

    fn execute_search(ctx: &CommandContext, args: &SearchArgs) -> Result<()> {
        search::execute(ctx, args.variant, args.heuristic, args.weight)
    }

    fn execute_tune(ctx: &CommandContext, args: &TuneArgs) -> Result<()> {
        tune::execute(ctx, args.variant, &args.heuristic, args.steps)
    }

    fn execute_config(ctx: &CommandContext, args: &ConfigArgs) -> Result<()> {
        config::execute(ctx, args.init, args.force)
    }
}
