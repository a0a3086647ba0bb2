//! `potluck reset` -- delete all planning data.

use anyhow::{Result, bail};

use crate::cli::ResetArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;
use crate::session;

/// Execute the `potluck reset` command.
pub fn run(ctx: &RuntimeContext, args: &ResetArgs) -> Result<()> {
    if !args.yes {
        bail!(
            "reset deletes every dish, vote and ingredient for all participants.\n\
            Re-run with --yes to confirm."
        );
    }

    let project = ctx.open_project()?;
    let sessions = project.sessions_dir();
    let mut current = session::load(&sessions, &ctx.participant)?;

    project.workflow().reset(&mut current)?;
    let cleared = session::clear_all(&sessions)?;

    if ctx.json {
        output_json(&serde_json::json!({ "reset": true, "sessions_cleared": cleared }));
    } else {
        ctx.say("All planning data deleted. Everyone is back at step 1.");
    }
    Ok(())
}
