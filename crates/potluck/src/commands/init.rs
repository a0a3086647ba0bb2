//! `potluck init` -- create a planning project.

use std::fs;

use anyhow::{Context, Result, bail};

use potluck_config::potluck_dir::POTLUCK_DIR_NAME;
use potluck_core::Phase;
use potluck_config::{PotluckConfig, config::CONFIG_FILE, ensure_potluck_dir, save_config};

use crate::cli::InitArgs;
use crate::context::{Project, RuntimeContext};
use crate::output::{output_json, phase_banner, phase_hint};

/// Default gitignore content for the `.potluck` directory.
const GITIGNORE_CONTENT: &str = r#"# Potluck store files
*.db
*.db-journal
*.db-wal
*.db-shm

# Per-participant progress
sessions/
"#;

/// Execute the `potluck init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let root = ctx.init_root()?;
    let potluck_dir = root.join(POTLUCK_DIR_NAME);
    let config_path = potluck_dir.join(CONFIG_FILE);

    if !args.force && config_path.exists() {
        bail!(
            "Found existing project in {}\n\n\
            To keep planning, just run potluck commands (e.g., potluck status).\n\
            To start over but keep this project, run 'potluck reset --yes'.\n\
            Or use --force to rewrite config.yaml with defaults.",
            potluck_dir.display()
        );
    }

    let potluck_dir = ensure_potluck_dir(&root)
        .with_context(|| format!("failed to create directory: {}", potluck_dir.display()))?;

    let gitignore_path = potluck_dir.join(".gitignore");
    if !gitignore_path.exists() {
        fs::write(&gitignore_path, GITIGNORE_CONTENT).with_context(|| {
            format!("failed to create .gitignore: {}", gitignore_path.display())
        })?;
    }

    save_config(&potluck_dir, &PotluckConfig::default())
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    // Opening the store creates the schema and seeds every header row.
    let project = Project::open(potluck_dir.clone())?;
    let store_path = project.config.store_path(&potluck_dir);

    if ctx.json {
        output_json(&serde_json::json!({
            "directory": potluck_dir.display().to_string(),
            "store": store_path.display().to_string(),
        }));
    } else {
        ctx.say(format!("Initialized potluck project in {}", potluck_dir.display()));
        ctx.say(format!("  Store: {}", store_path.display()));
        ctx.say("");
        ctx.say(phase_banner(Phase::Submit));
        ctx.say(phase_hint(Phase::Submit));
    }

    Ok(())
}
