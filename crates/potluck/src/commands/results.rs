//! `potluck results` -- ranked vote results.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};
use crate::session;

/// Execute the `potluck results` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.open_project()?;
    let sessions = project.sessions_dir();
    let mut current = session::load(&sessions, &ctx.participant)?;

    let selection = project.workflow().results(&mut current)?;
    session::save(&sessions, &current)?;

    if ctx.json {
        output_json(&selection);
        return Ok(());
    }
    if selection.ranking.is_empty() {
        ctx.say("No votes yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = selection
        .ranking
        .iter()
        .enumerate()
        .map(|(i, (name, votes))| {
            let marker = if i < selection.top.len() { "*" } else { "" };
            vec![(i + 1).to_string(), name.clone(), votes.to_string(), marker.to_string()]
        })
        .collect();
    output_table(&["#", "Dish", "Votes", "Top"], &rows);
    Ok(())
}
