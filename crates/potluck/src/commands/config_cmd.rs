//! `potluck config` -- inspect configuration.

use anyhow::{Context, Result};

use potluck_config::config::CONFIG_FILE;
use potluck_config::load_config;

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `potluck config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    let potluck_dir = ctx.resolve_potluck_dir()?;

    match &args.command {
        ConfigCommands::Show => {
            let config = load_config(&potluck_dir).context("failed to load configuration")?;
            if ctx.json {
                output_json(&config);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("failed to render configuration")?;
                print!("{yaml}");
            }
        }

        ConfigCommands::Path => {
            let path = potluck_dir.join(CONFIG_FILE);
            if ctx.json {
                output_json(&serde_json::json!({ "path": path.display().to_string() }));
            } else {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
