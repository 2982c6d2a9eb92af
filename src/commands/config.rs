//! `waymark config`: show or write the effective configuration

use waymark_core::config::WaymarkConfig;
use waymark_core::error::{Result, WaymarkError};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, init: bool, force: bool) -> Result<()> {
    let config = ctx.load_config()?;

    if init {
        let path = WaymarkConfig::default_path(ctx.data_dir);
        if path.exists() && !force {
            return Err(WaymarkError::UsageError(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        config.save(&path)?;
        tracing::info!(path = %path.display(), "config_written");

        match ctx.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "written": path.display().to_string() })
            ),
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    println!("Wrote {}", path.display());
                }
            }
        }
        return Ok(());
    }

    match ctx.cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Human => print!("{}", config.to_toml()?),
    }
    Ok(())
}
