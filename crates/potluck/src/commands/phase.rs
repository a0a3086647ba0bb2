//! `potluck next` / `potluck back` -- move between steps.

use anyhow::Result;

use potluck_core::Phase;
use potluck_workflow::WorkflowContext;

use crate::context::{Project, RuntimeContext};
use crate::output::{output_json, phase_banner, phase_hint};
use crate::session;

/// Execute the `potluck next` command.
pub fn run_next(ctx: &RuntimeContext) -> Result<()> {
    transition(ctx, |project, session| project.workflow().advance(session))
}

/// Execute the `potluck back` command.
pub fn run_back(ctx: &RuntimeContext) -> Result<()> {
    transition(ctx, |project, session| project.workflow().retreat(session))
}

fn transition<F>(ctx: &RuntimeContext, step: F) -> Result<()>
where
    F: FnOnce(&Project, &mut WorkflowContext) -> potluck_workflow::Result<Phase>,
{
    let project = ctx.open_project()?;
    let sessions = project.sessions_dir();
    let mut current = session::load(&sessions, &ctx.participant)?;

    let phase = step(&project, &mut current)?;
    session::save(&sessions, &current)?;

    if ctx.json {
        output_json(&current);
        return Ok(());
    }

    ctx.say(phase_banner(phase));
    if phase == Phase::Select {
        match current.top_selection.as_deref() {
            Some([]) | None => ctx.say("No votes yet."),
            Some(top) => ctx.say(format!("Top dishes: {}", top.join(", "))),
        }
    }
    ctx.say(phase_hint(phase));
    Ok(())
}
