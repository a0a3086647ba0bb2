//! Per-participant session files under `.potluck/sessions/`.
//!
//! Each participant walks through the phases independently; their position
//! and cached top selection survive between invocations as a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use potluck_core::dish::name_key;
use potluck_core::idgen::name_digest;
use potluck_workflow::WorkflowContext;

/// File name for a participant: a readable prefix plus a digest of the
/// case-insensitive name, so distinct participants never share a file.
fn session_file(sessions_dir: &Path, participant: &str) -> PathBuf {
    let readable: String = name_key(participant)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(24)
        .collect();
    let digest = name_digest(participant);
    sessions_dir.join(format!("{readable}-{digest}.json"))
}

/// Loads a participant's session, starting a fresh one if none is saved.
pub fn load(sessions_dir: &Path, participant: &str) -> Result<WorkflowContext> {
    let path = session_file(sessions_dir, participant);
    if !path.exists() {
        debug!(participant, "no saved session, starting at step 1");
        return Ok(WorkflowContext::new(participant));
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read session: {}", path.display()))?;
    let mut ctx: WorkflowContext = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse session: {}", path.display()))?;
    ctx.participant = participant.to_string();
    Ok(ctx)
}

/// Writes a participant's session.
pub fn save(sessions_dir: &Path, ctx: &WorkflowContext) -> Result<()> {
    fs::create_dir_all(sessions_dir)
        .with_context(|| format!("failed to create directory: {}", sessions_dir.display()))?;
    let path = session_file(sessions_dir, &ctx.participant);
    let content = serde_json::to_string_pretty(ctx).context("failed to serialize session")?;
    fs::write(&path, content)
        .with_context(|| format!("failed to write session: {}", path.display()))?;
    Ok(())
}

/// Deletes every saved session and returns how many were removed.
pub fn clear_all(sessions_dir: &Path) -> Result<usize> {
    if !sessions_dir.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in fs::read_dir(sessions_dir)
        .with_context(|| format!("failed to read directory: {}", sessions_dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove session: {}", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use potluck_core::Phase;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_session_starts_fresh() {
        let tmp = tempfile::TempDir::new().unwrap();
        let ctx = load(tmp.path(), "alice").unwrap();
        assert_eq!(ctx, WorkflowContext::new("alice"));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("sessions");
        let mut ctx = WorkflowContext::new("Alice Smith");
        ctx.phase = Phase::Select;
        ctx.top_selection = Some(vec!["Dal".into()]);
        save(&dir, &ctx).unwrap();

        assert!(session_file(&dir, "Alice Smith").exists());
        assert_eq!(load(&dir, "Alice Smith").unwrap(), ctx);
    }

    #[test]
    fn same_name_in_other_case_shares_session() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut ctx = WorkflowContext::new("Alice");
        ctx.phase = Phase::Vote;
        save(tmp.path(), &ctx).unwrap();
        assert_eq!(load(tmp.path(), " alice ").unwrap().phase, Phase::Vote);
    }

    #[test]
    fn similar_names_keep_separate_sessions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut jose = WorkflowContext::new("José");
        jose.phase = Phase::Shopping;
        save(tmp.path(), &jose).unwrap();
        let mut smith = WorkflowContext::new("Alice Smith");
        smith.phase = Phase::Ingredients;
        save(tmp.path(), &smith).unwrap();

        assert_eq!(load(tmp.path(), "José").unwrap().phase, Phase::Shopping);
        assert_eq!(load(tmp.path(), "Jos?").unwrap().phase, Phase::Submit);
        assert_eq!(load(tmp.path(), "Jos!").unwrap().phase, Phase::Submit);
        assert_eq!(load(tmp.path(), "alice_smith").unwrap().phase, Phase::Submit);
        assert_eq!(
            load(tmp.path(), "ALICE SMITH").unwrap().phase,
            Phase::Ingredients
        );
    }

    #[test]
    fn clear_all_removes_every_session() {
        let tmp = tempfile::TempDir::new().unwrap();
        for name in ["alice", "bob"] {
            save(tmp.path(), &WorkflowContext::new(name)).unwrap();
        }
        assert_eq!(clear_all(tmp.path()).unwrap(), 2);
        assert_eq!(load(tmp.path(), "bob").unwrap().phase, Phase::Submit);
    }

    #[test]
    fn clear_all_without_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert_eq!(clear_all(&tmp.path().join("sessions")).unwrap(), 0);
    }
}
