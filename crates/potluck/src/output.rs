//! Output formatting helpers for the `potluck` CLI.

use std::io::{self, Write};

use serde::Serialize;

use potluck_core::Phase;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment. Nothing is
/// printed for an empty table.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let widths = column_widths(headers, rows);
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let _ = writeln!(handle, "{}", format_row(&header_cells, &widths));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(handle, "{}", format_row(&separator, &widths));
    for row in rows {
        let _ = writeln!(handle, "{}", format_row(row, &widths));
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        match widths.get(i) {
            Some(width) => line.push_str(&format!("{:<width$}", cell, width = *width)),
            None => line.push_str(cell),
        }
    }
    line.trim_end().to_string()
}

/// One-line phase banner, e.g. `Step 2/5: Vote for dishes you like`.
pub fn phase_banner(phase: Phase) -> String {
    format!("Step {}/{}: {}", phase.step(), Phase::all().len(), phase.title())
}

/// Hint naming the command for the phase.
pub fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Submit => "Propose dishes with `potluck dish add <name> --type <type>`.",
        Phase::Vote => "Vote with `potluck vote <dish>...`.",
        Phase::Select => "See the ranking with `potluck results`.",
        Phase::Ingredients => {
            "Add ingredients with `potluck ingredient add --dish <dish> <name> <qty> <unit>`."
        }
        Phase::Shopping => "Print the list with `potluck shopping` or save it with `--export`.",
    }
}
