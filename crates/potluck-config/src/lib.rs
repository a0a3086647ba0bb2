//! Configuration management for the potluck planner.
//!
//! This crate handles discovering the `.potluck/` project directory, loading
//! `.potluck/config.yaml` layered with `POTLUCK_*` environment overrides, and
//! saving configuration back to disk.

pub mod config;
pub mod potluck_dir;

pub use config::{PotluckConfig, load_config, save_config};
pub use potluck_dir::{ensure_potluck_dir, find_potluck_dir, find_potluck_dir_or_error};
