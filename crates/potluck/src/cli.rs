//! Clap CLI definitions for the `potluck` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use potluck_core::DietaryType;

/// potluck -- plan a group meal in five steps.
///
/// Participants propose dishes, vote, see the top picks, attach ingredients
/// and finally get one consolidated shopping list.
#[derive(Parser, Debug)]
#[command(
    name = "potluck",
    about = "Plan a group meal: propose, vote, shop",
    long_about = "Participants propose dishes, vote on them, attach ingredients to the winners and get one consolidated shopping list.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project directory (default: search upward for .potluck/).
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Participant name (default: $POTLUCK_PARTICIPANT, $USER).
    #[arg(long, global = true, env = "POTLUCK_PARTICIPANT")]
    pub participant: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .potluck project in the current (or --dir) directory.
    Init(InitArgs),

    /// Show your current step and what has been planned so far.
    Status,

    /// Move on to the next step.
    Next,

    /// Go back to the previous step.
    Back,

    /// Propose, list or withdraw dishes.
    Dish(DishArgs),

    /// Vote for one or more proposed dishes (step 2).
    Vote(VoteArgs),

    /// Show the ranked vote results (step 3).
    Results,

    /// Attach ingredients to dishes (step 4).
    #[command(alias = "ing")]
    Ingredient(IngredientArgs),

    /// Show or export the consolidated shopping list (step 5).
    Shopping(ShoppingArgs),

    /// Delete every dish, vote and ingredient and start over.
    Reset(ResetArgs),

    /// Inspect configuration.
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Arguments for `potluck init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Rewrite config.yaml with defaults even if the project exists.
    /// Planning data is kept.
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Dish
// ---------------------------------------------------------------------------

/// Arguments for `potluck dish`.
#[derive(Args, Debug)]
pub struct DishArgs {
    #[command(subcommand)]
    pub command: DishCommands,
}

/// Dish subcommands.
#[derive(Subcommand, Debug)]
pub enum DishCommands {
    /// Propose a dish (step 1).
    Add(DishAddArgs),
    /// List proposed dishes.
    #[command(alias = "ls")]
    List,
    /// Withdraw every dish with this name (step 1).
    #[command(alias = "rm")]
    Remove(DishRemoveArgs),
}

/// Arguments for `potluck dish add`.
#[derive(Args, Debug)]
pub struct DishAddArgs {
    /// Dish name.
    pub name: String,

    /// Dietary type: Vegan, Vegetarian or Carnivore.
    #[arg(short = 't', long = "type")]
    pub dietary_type: DietaryType,
}

/// Arguments for `potluck dish remove`.
#[derive(Args, Debug)]
pub struct DishRemoveArgs {
    /// Dish name (case-insensitive).
    pub name: String,
}

// ---------------------------------------------------------------------------
// Vote
// ---------------------------------------------------------------------------

/// Arguments for `potluck vote`.
#[derive(Args, Debug)]
pub struct VoteArgs {
    /// Names of the dishes you like.
    #[arg(required = true)]
    pub dishes: Vec<String>,
}

// ---------------------------------------------------------------------------
// Ingredient
// ---------------------------------------------------------------------------

/// Arguments for `potluck ingredient`.
#[derive(Args, Debug)]
pub struct IngredientArgs {
    #[command(subcommand)]
    pub command: IngredientCommands,
}

/// Ingredient subcommands.
#[derive(Subcommand, Debug)]
pub enum IngredientCommands {
    /// Add an ingredient to a dish (step 4).
    Add(IngredientAddArgs),
    /// List ingredient entries.
    #[command(alias = "ls")]
    List(IngredientListArgs),
}

/// Arguments for `potluck ingredient add`.
#[derive(Args, Debug)]
pub struct IngredientAddArgs {
    /// Dish the ingredient belongs to.
    #[arg(short = 'd', long)]
    pub dish: String,

    /// Ingredient name.
    pub name: String,

    /// Quantity needed.
    #[arg(allow_negative_numbers = true)]
    pub quantity: f64,

    /// Unit of the quantity (g, cups, units, ...).
    pub unit: String,

    /// Link to the recipe.
    #[arg(long)]
    pub recipe: Option<String>,
}

/// Arguments for `potluck ingredient list`.
#[derive(Args, Debug)]
pub struct IngredientListArgs {
    /// Only show entries for this dish.
    #[arg(short = 'd', long)]
    pub dish: Option<String>,
}

// ---------------------------------------------------------------------------
// Shopping
// ---------------------------------------------------------------------------

/// Arguments for `potluck shopping`.
#[derive(Args, Debug)]
pub struct ShoppingArgs {
    /// Write the list as an .xlsx workbook (default file name from config).
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

/// Arguments for `potluck reset`.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Confirm that all planning data should be deleted.
    #[arg(long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Arguments for `potluck config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (file plus environment overrides).
    Show,
    /// Print the path of config.yaml.
    Path,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `potluck completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dish_add() {
        let cli = Cli::parse_from(["potluck", "dish", "add", "Dal", "-t", "vegan"]);
        match cli.command {
            Some(Commands::Dish(DishArgs {
                command: DishCommands::Add(args),
            })) => {
                assert_eq!(args.name, "Dal");
                assert_eq!(args.dietary_type, DietaryType::Vegan);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_dietary_type() {
        let result = Cli::try_parse_from(["potluck", "dish", "add", "Dal", "-t", "pescatarian"]);
        assert!(result.is_err());
    }

    #[test]
    fn export_flag_without_path() {
        let cli = Cli::parse_from(["potluck", "shopping", "--export"]);
        match cli.command {
            Some(Commands::Shopping(args)) => assert_eq!(args.export, Some(None)),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn export_flag_with_path() {
        let cli = Cli::parse_from(["potluck", "shopping", "--export", "out.xlsx"]);
        match cli.command {
            Some(Commands::Shopping(args)) => {
                assert_eq!(args.export, Some(Some(PathBuf::from("out.xlsx"))))
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_reaches_validation() {
        let cli = Cli::parse_from([
            "potluck", "ingredient", "add", "-d", "Soup", "salt", "-2", "g",
        ]);
        match cli.command {
            Some(Commands::Ingredient(IngredientArgs {
                command: IngredientCommands::Add(args),
            })) => assert_eq!(args.quantity, -2.0),
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
