//! `potluck` -- group meal planner CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context, installs
//! logging and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;
mod session;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    init_logging(&ctx);

    let result = match cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, &args),
        Some(Commands::Status) => commands::status::run(&ctx),
        Some(Commands::Next) => commands::phase::run_next(&ctx),
        Some(Commands::Back) => commands::phase::run_back(&ctx),
        Some(Commands::Dish(args)) => commands::dish::run(&ctx, &args),
        Some(Commands::Vote(args)) => commands::vote::run(&ctx, &args),
        Some(Commands::Results) => commands::results::run(&ctx),
        Some(Commands::Ingredient(args)) => commands::ingredient::run(&ctx, &args),
        Some(Commands::Shopping(args)) => commands::shopping::run(&ctx, &args),
        Some(Commands::Reset(args)) => commands::reset::run(&ctx, &args),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr. `-v` turns on debug output for the planner crates,
/// `-q` limits output to errors, otherwise `RUST_LOG` applies (default `warn`).
fn init_logging(ctx: &RuntimeContext) {
    let filter = if ctx.verbose {
        EnvFilter::new("potluck=debug")
    } else if ctx.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
