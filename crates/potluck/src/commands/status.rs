//! `potluck status` -- where am I, and what has been planned.

use anyhow::Result;
use serde::Serialize;

use potluck_core::Phase;

use crate::context::RuntimeContext;
use crate::output::{output_json, phase_banner, phase_hint};
use crate::session;

#[derive(Serialize)]
struct StatusView {
    participant: String,
    phase: Phase,
    step: usize,
    title: &'static str,
    dishes: usize,
    votes: u64,
    ingredients: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_selection: Option<Vec<String>>,
}

/// Execute the `potluck status` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.open_project()?;
    let workflow = project.workflow();
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let view = StatusView {
        participant: current.participant.clone(),
        phase: current.phase,
        step: current.phase.step(),
        title: current.phase.title(),
        dishes: workflow.dishes()?.len(),
        votes: workflow.vote_box().load()?.total_votes(),
        ingredients: workflow.ingredients()?.len(),
        top_selection: current.top_selection.clone(),
    };

    if ctx.json {
        output_json(&view);
        return Ok(());
    }

    println!("Participant: {}", view.participant);
    println!("{}", phase_banner(view.phase));
    println!();
    println!("  Dishes proposed:   {}", view.dishes);
    println!("  Votes cast:        {}", view.votes);
    println!("  Ingredient entries: {}", view.ingredients);
    if let Some(top) = &view.top_selection {
        if !top.is_empty() {
            println!("  Top dishes:        {}", top.join(", "));
        }
    }
    println!();
    println!("{}", phase_hint(view.phase));
    Ok(())
}
