//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what every handler needs before touching the
//! store: the participant name and the global flags. [`Project`] is opened
//! on demand by the handlers that need planning data.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use potluck_config::potluck_dir::POTLUCK_DIR_NAME;
use potluck_config::{PotluckConfig, find_potluck_dir_or_error, load_config};
use potluck_storage::SqliteStore;
use potluck_workflow::{Workflow, WorkflowSettings};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit project directory from `--dir`.
    pub dir: Option<PathBuf>,

    /// Who is running the command.
    pub participant: String,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            dir: global.dir.clone(),
            participant: resolve_participant(global.participant.as_deref()),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// The directory `init` creates `.potluck/` in.
    pub fn init_root(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => env::current_dir().context("failed to get current directory"),
        }
    }

    /// Locates the `.potluck/` directory.
    ///
    /// `--dir` wins over `$POTLUCK_DIR`, which wins over searching upward
    /// from the current directory.
    pub fn resolve_potluck_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.dir {
            let candidate = if dir.ends_with(POTLUCK_DIR_NAME) {
                dir.clone()
            } else {
                dir.join(POTLUCK_DIR_NAME)
            };
            if !candidate.is_dir() {
                bail!(
                    "no {POTLUCK_DIR_NAME} directory in {}\nHint: run 'potluck init --dir {}'",
                    dir.display(),
                    dir.display()
                );
            }
            return Ok(candidate);
        }

        let cwd = env::current_dir().context("failed to get current directory")?;
        Ok(find_potluck_dir_or_error(&cwd)?)
    }

    /// Opens the project: configuration plus store.
    pub fn open_project(&self) -> Result<Project> {
        let dir = self.resolve_potluck_dir()?;
        Project::open(dir)
    }

    /// Prints a line to stdout unless `--quiet` or `--json` is set.
    pub fn say(&self, message: impl AsRef<str>) {
        if !self.quiet && !self.json {
            println!("{}", message.as_ref());
        }
    }

    /// Prints a notice to stderr unless `--quiet` is set.
    pub fn notice(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }
}

/// An opened planning project.
pub struct Project {
    pub dir: PathBuf,
    pub config: PotluckConfig,
    pub store: SqliteStore,
}

impl Project {
    pub fn open(dir: PathBuf) -> Result<Self> {
        let config = load_config(&dir)
            .with_context(|| format!("failed to load configuration from {}", dir.display()))?;
        let store_path = config.store_path(&dir);
        let store = SqliteStore::open(&store_path)
            .with_context(|| format!("failed to open store: {}", store_path.display()))?;
        Ok(Self { dir, config, store })
    }

    pub fn settings(&self) -> WorkflowSettings {
        WorkflowSettings {
            top_k: self.config.selection.top_k,
            vote_policy: self.config.voting.policy,
            duplicates: self.config.dishes.duplicates,
        }
    }

    pub fn workflow(&self) -> Workflow<'_> {
        Workflow::new(&self.store, self.settings())
    }

    pub fn sessions_dir(&self) -> PathBuf {
        sessions_dir(&self.dir)
    }
}

/// Where per-participant session files live.
pub fn sessions_dir(potluck_dir: &Path) -> PathBuf {
    potluck_dir.join("sessions")
}

/// Resolves the participant name.
///
/// Priority: explicit flag (or `POTLUCK_PARTICIPANT`, via clap) > USER env >
/// "unknown".
fn resolve_participant(flag_value: Option<&str>) -> String {
    if let Some(name) = flag_value {
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }

    if let Ok(user) = env::var("USER").or_else(|_| env::var("USERNAME")) {
        if !user.is_empty() {
            return user;
        }
    }

    "unknown".to_string()
}
