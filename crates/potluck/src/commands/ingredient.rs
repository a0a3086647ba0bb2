//! `potluck ingredient` -- attach ingredients to dishes.

use anyhow::Result;

use potluck_core::IngredientEntry;

use crate::cli::{IngredientAddArgs, IngredientArgs, IngredientCommands, IngredientListArgs};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};
use crate::session;

/// Execute the `potluck ingredient` command.
pub fn run(ctx: &RuntimeContext, args: &IngredientArgs) -> Result<()> {
    match &args.command {
        IngredientCommands::Add(add) => run_add(ctx, add),
        IngredientCommands::List(list) => run_list(ctx, list),
    }
}

fn run_add(ctx: &RuntimeContext, args: &IngredientAddArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let added = project.workflow().add_ingredient(
        &current,
        &args.dish,
        &args.name,
        args.quantity,
        &args.unit,
        args.recipe.as_deref(),
    )?;

    if ctx.json {
        output_json(&added);
        return Ok(());
    }
    match added {
        Some(entry) => ctx.say(format!(
            "Added {} {} {} to {}",
            entry.quantity, entry.unit, entry.name, entry.dish
        )),
        None => ctx.notice("Nothing added: dish, ingredient and unit are required."),
    }
    Ok(())
}

fn run_list(ctx: &RuntimeContext, args: &IngredientListArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let ledger = project.workflow().ledger();
    let entries = match &args.dish {
        Some(dish) => ledger.list_for(dish)?,
        None => ledger.list()?,
    };

    if ctx.json {
        output_json(&entries);
        return Ok(());
    }
    if entries.is_empty() {
        ctx.say("No ingredients yet.");
        return Ok(());
    }
    output_table(&["Dish", "Ingredient", "Quantity", "Unit", "Recipe"], &entry_rows(&entries));
    Ok(())
}

fn entry_rows(entries: &[IngredientEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            vec![
                e.dish.clone(),
                e.name.clone(),
                e.quantity.to_string(),
                e.unit.clone(),
                e.recipe_url.clone().unwrap_or_default(),
            ]
        })
        .collect()
}
