//! Configuration types and loading for the potluck planner.
//!
//! The main entry point is [`PotluckConfig`], which represents the contents
//! of `.potluck/config.yaml`. Configuration is loaded with [`load_config`]
//! (defaults, then the YAML file, then `POTLUCK_*` environment variables)
//! and saved with [`save_config`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use potluck_core::policy::{DuplicatePolicy, VotePolicy};

/// File name of the configuration inside `.potluck/`.
pub const CONFIG_FILE: &str = "config.yaml";

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `POTLUCK_SELECTION__TOP_K=4`.
pub const ENV_PREFIX: &str = "POTLUCK_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration could not be serialized to YAML.
    #[error("failed to serialize config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The layered configuration was invalid.
    #[error("invalid configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The `.potluck/` directory was not found.
    #[error("no .potluck directory found (run 'potluck init' first)")]
    DirNotFound,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Store configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database file, relative to `.potluck/` unless absolute.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "potluck.db".to_string()
}

/// Top-dish selection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// How many dishes advance past the voting phase.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    6
}

/// Voting section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VotingConfig {
    /// Whether participants may vote more than once.
    #[serde(default)]
    pub policy: VotePolicy,
}

/// Dish registry section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DishesConfig {
    /// How duplicate dish names are handled.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

/// Shopping list export section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default file name of the exported workbook.
    #[serde(default = "default_export_filename")]
    pub filename: String,

    /// Name of the single worksheet.
    #[serde(default = "default_export_sheet")]
    pub sheet: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
            sheet: default_export_sheet(),
        }
    }
}

fn default_export_filename() -> String {
    "shopping_list.xlsx".to_string()
}

fn default_export_sheet() -> String {
    "Shopping List".to_string()
}

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full planner configuration, corresponding to `.potluck/config.yaml`.
///
/// All fields use `serde` defaults so a partially-specified file yields
/// sensible values for everything it leaves out.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PotluckConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub voting: VotingConfig,

    #[serde(default)]
    pub dishes: DishesConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl PotluckConfig {
    /// Resolves the database path against the `.potluck/` directory.
    pub fn store_path(&self, potluck_dir: &Path) -> PathBuf {
        let path = PathBuf::from(&self.store.path);
        if path.is_absolute() {
            path
        } else {
            potluck_dir.join(path)
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration for the given `.potluck/` directory.
///
/// A missing or blank `config.yaml` contributes nothing; environment
/// variables prefixed with `POTLUCK_` override file values.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::Figment`] if the merged values do not form a valid
/// configuration.
pub fn load_config(potluck_dir: &Path) -> Result<PotluckConfig> {
    let config_path = potluck_dir.join(CONFIG_FILE);

    let mut figment = Figment::from(Serialized::defaults(PotluckConfig::default()));

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        if !content.trim().is_empty() {
            figment = figment.merge(Yaml::string(&content));
        }
    }

    let config = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.potluck/` directory.
///
/// The directory is created if it does not exist.
pub fn save_config(potluck_dir: &Path, config: &PotluckConfig) -> Result<()> {
    std::fs::create_dir_all(potluck_dir)?;

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(potluck_dir.join(CONFIG_FILE), yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
