//! Discovery and management of the `.potluck/` directory.
//!
//! The `.potluck/` directory holds a planning project's store, its
//! configuration and per-participant session files.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the project metadata directory.
pub const POTLUCK_DIR_NAME: &str = ".potluck";

/// The name of the environment variable that can override the directory.
pub const POTLUCK_DIR_ENV: &str = "POTLUCK_DIR";

/// Walk up the directory tree from `start` looking for a `.potluck/` directory.
///
/// The `POTLUCK_DIR` environment variable is checked first. Returns `None`
/// if the filesystem root is reached without finding one.
///
/// # Examples
///
/// ```no_run
/// use potluck_config::potluck_dir::find_potluck_dir;
/// use std::path::Path;
///
/// if let Some(dir) = find_potluck_dir(Path::new(".")) {
///     println!("Found project at {}", dir.display());
/// }
/// ```
pub fn find_potluck_dir(start: &Path) -> Option<PathBuf> {
    if let Ok(env_dir) = std::env::var(POTLUCK_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    let start = start.canonicalize().ok()?;
    let mut current = start.as_path();
    loop {
        let candidate = current.join(POTLUCK_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    None
}

/// Like [`find_potluck_dir`], but returns [`ConfigError::DirNotFound`]
/// instead of `None`.
pub fn find_potluck_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_potluck_dir(start).ok_or(ConfigError::DirNotFound)
}

/// Ensure a `.potluck/` directory exists at the given path.
///
/// If `path` itself is not called `.potluck`, a `.potluck/` subdirectory is
/// created under it. Returns the path to the `.potluck/` directory.
pub fn ensure_potluck_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let dir = if path.ends_with(POTLUCK_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(POTLUCK_DIR_NAME)
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_dir_in_start() {
        let dir = tempfile::tempdir().unwrap();
        let potluck = dir.path().join(POTLUCK_DIR_NAME);
        std::fs::create_dir(&potluck).unwrap();

        let found = find_potluck_dir(dir.path()).unwrap().canonicalize().unwrap();
        assert_eq!(found, potluck.canonicalize().unwrap());
    }

    #[test]
    fn finds_dir_from_child() {
        let dir = tempfile::tempdir().unwrap();
        let potluck = dir.path().join(POTLUCK_DIR_NAME);
        std::fs::create_dir(&potluck).unwrap();
        let child = dir.path().join("menus").join("summer");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_potluck_dir(&child).unwrap().canonicalize().unwrap();
        assert_eq!(found, potluck.canonicalize().unwrap());
    }

    #[test]
    fn or_error_finds_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(POTLUCK_DIR_NAME)).unwrap();
        assert!(find_potluck_dir_or_error(dir.path()).is_ok());
    }

    #[test]
    fn or_error_names_init_when_missing() {
        if std::env::var_os(POTLUCK_DIR_ENV).is_some() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        if find_potluck_dir(dir.path()).is_some() {
            return;
        }
        let err = find_potluck_dir_or_error(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DirNotFound));
        assert!(err.to_string().contains("potluck init"));
    }

    #[test]
    fn ensure_creates_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_potluck_dir(dir.path()).unwrap();
        let second = ensure_potluck_dir(dir.path()).unwrap();
        assert!(first.is_dir());
        assert!(first.ends_with(POTLUCK_DIR_NAME));
        assert_eq!(first, second);
    }

    #[test]
    fn ensure_accepts_named_path() {
        let dir = tempfile::tempdir().unwrap();
        let named = dir.path().join(POTLUCK_DIR_NAME);
        assert_eq!(ensure_potluck_dir(&named).unwrap(), named);
    }
}
