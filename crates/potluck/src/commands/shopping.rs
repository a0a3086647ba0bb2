//! `potluck shopping` -- the consolidated shopping list.

use std::path::PathBuf;

use anyhow::{Context, Result};

use potluck_export::write_shopping_list;

use crate::cli::ShoppingArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};
use crate::session;

/// Execute the `potluck shopping` command.
pub fn run(ctx: &RuntimeContext, args: &ShoppingArgs) -> Result<()> {
    let project = ctx.open_project()?;
    let current = session::load(&project.sessions_dir(), &ctx.participant)?;

    let lines = project.workflow().shopping_list(&current)?;

    if let Some(requested) = &args.export {
        let path = requested
            .clone()
            .unwrap_or_else(|| PathBuf::from(&project.config.export.filename));
        write_shopping_list(&lines, &project.config.export.sheet, &path)
            .with_context(|| format!("failed to export shopping list to {}", path.display()))?;

        if ctx.json {
            output_json(&serde_json::json!({
                "path": path.display().to_string(),
                "mime_type": potluck_export::MIME_TYPE,
                "lines": lines.len(),
            }));
        } else {
            ctx.say(format!("Wrote {} line(s) to {}", lines.len(), path.display()));
        }
        return Ok(());
    }

    if ctx.json {
        output_json(&lines);
        return Ok(());
    }
    if lines.is_empty() {
        ctx.say("The shopping list is empty.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|l| vec![l.ingredient.clone(), l.unit.clone(), l.total_quantity.to_string()])
        .collect();
    output_table(&potluck_export::COLUMNS, &rows);
    Ok(())
}
