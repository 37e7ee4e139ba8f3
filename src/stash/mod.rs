//! Date-based stash directories
//!
//! Personal files are filed under `<repo>/<dirname>/<YYYY-MM-DD>/`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// A dated directory inside a repository's stash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedDir {
    pub absolute: PathBuf,
    /// Path relative to the repository root, e.g. `.hiden/2025-12-04`.
    pub relative: PathBuf,
}

/// Create `<repo_root>/<dirname>/<day>` if it does not exist yet.
pub fn ensure_dated_dir(repo_root: &Path, dirname: &str, day: NaiveDate) -> Result<DatedDir> {
    let relative = Path::new(dirname).join(day.format("%Y-%m-%d").to_string());
    let absolute = repo_root.join(&relative);
    fs::create_dir_all(&absolute)
        .with_context(|| format!("failed to create directory: {}", absolute.display()))?;
    Ok(DatedDir { absolute, relative })
}

/// Move `file` into the dated directory for `day`, keeping its base name.
///
/// Returns the new location relative to the repository root. An existing file
/// with the same name is never overwritten.
pub fn move_into_stash(
    repo_root: &Path,
    dirname: &str,
    file: &Path,
    day: NaiveDate,
) -> Result<PathBuf> {
    let Some(base) = file.file_name() else {
        anyhow::bail!("failed to move file: {} has no file name", file.display());
    };
    if !file.exists() {
        anyhow::bail!("failed to move file: {} does not exist", file.display());
    }

    let dir = ensure_dated_dir(repo_root, dirname, day)?;
    let target = dir.absolute.join(base);
    if target.exists() {
        anyhow::bail!("failed to move file: {} already exists", target.display());
    }

    fs::rename(file, &target).with_context(|| {
        format!("failed to move file: {} -> {}", file.display(), target.display())
    })?;
    tracing::debug!("Moved {} to {}", file.display(), target.display());

    Ok(dir.relative.join(base))
}
