//! `potluck vote` -- vote for dishes.

use anyhow::Result;

use crate::cli::VoteArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;
use crate::session;

/// Execute the `potluck vote` command.
pub fn run(ctx: &RuntimeContext, args: &VoteArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let receipt = project.workflow().vote(&current, args.dishes.as_slice())?;

    if ctx.json {
        output_json(&receipt);
        return Ok(());
    }
    if receipt.counted.is_empty() {
        ctx.notice("No votes recorded.");
    } else {
        ctx.say(format!("Voted for {}", receipt.counted.join(", ")));
    }
    if !receipt.ignored.is_empty() {
        ctx.notice(format!(
            "Not proposed, ignored: {}",
            receipt.ignored.join(", ")
        ));
    }
    Ok(())
}
