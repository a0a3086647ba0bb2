//! `potluck dish` -- propose, list and withdraw dishes.

use anyhow::Result;

use potluck_core::Dish;

use crate::cli::{DishAddArgs, DishArgs, DishCommands, DishRemoveArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};
use crate::session;

/// Execute the `potluck dish` command.
pub fn run(ctx: &RuntimeContext, args: &DishArgs) -> Result<()> {
    match &args.command {
        DishCommands::Add(add) => run_add(ctx, add),
        DishCommands::List => run_list(ctx),
        DishCommands::Remove(remove) => run_remove(ctx, remove),
    }
}

fn run_add(ctx: &RuntimeContext, args: &DishAddArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let added = project
        .workflow()
        .add_dish(&current, &args.name, args.dietary_type)?;

    if ctx.json {
        output_json(&added);
        return Ok(());
    }
    match added {
        Some(dish) => ctx.say(format!(
            "Added {} ({}) as {}",
            dish.name, dish.dietary_type, dish.id
        )),
        None => ctx.notice("Nothing added: the dish name is empty."),
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext) -> Result<()> {
    let project = ctx.open_project()?;
    let dishes = project.workflow().dishes()?;

    if ctx.json {
        output_json(&dishes);
        return Ok(());
    }
    if dishes.is_empty() {
        ctx.say("No dishes proposed yet.");
        return Ok(());
    }
    output_table(&["ID", "Name", "Type"], &dish_rows(&dishes));
    Ok(())
}

fn run_remove(ctx: &RuntimeContext, args: &DishRemoveArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let removed = project.workflow().remove_dish(&current, &args.name)?;

    if ctx.json {
        output_json(&serde_json::json!({ "name": args.name, "removed": removed }));
        return Ok(());
    }
    if removed == 0 {
        ctx.notice(format!("No dish named {:?}.", args.name));
    } else {
        ctx.say(format!("Removed {removed} dish(es) named {:?}", args.name));
    }
    Ok(())
}

fn dish_rows(dishes: &[Dish]) -> Vec<Vec<String>> {
    dishes
        .iter()
        .map(|d| vec![d.id.clone(), d.name.clone(), d.dietary_type.to_string()])
        .collect()
}
