//! Discovery-and-selection pipeline.
//!
//! Repository source → concurrent stash scan → recency ranking → picker →
//! timestamp touch of the chosen file.

use crate::domain::{Candidate, Config};
use crate::error::HidenError;
use crate::rank::rank_candidates;
use crate::scan::StashScanner;
use crate::select::filter::{label_matches, query_tokens};
use crate::select::{Picker, Selection};
use crate::source::RepoSource;
use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use std::path::{Path, PathBuf};

/// Scan every repository's stash directory and rank what was found.
pub fn collect_candidates(config: &Config, source: &dyn RepoSource) -> Result<Vec<Candidate>> {
    let repos = source.repositories()?;
    let scanner = StashScanner::new(config.dirname.as_str()).threads(config.scan_threads);
    let found = scanner.scan_all(&repos);
    Ok(rank_candidates(found))
}

/// Run the whole pipeline and return the chosen file.
///
/// `Ok(None)` means there was nothing to choose from. A declined selection
/// surfaces as [`HidenError::Cancelled`]. The chosen file's timestamps are set
/// to now so it ranks first next time.
pub fn find(
    config: &Config,
    source: &dyn RepoSource,
    picker: &mut dyn Picker,
) -> Result<Option<PathBuf>> {
    let candidates = collect_candidates(config, source)?;
    if candidates.is_empty() {
        tracing::debug!("No files found in any {} directory", config.dirname);
        return Ok(None);
    }

    match picker.pick(&candidates)? {
        Selection::Selected(candidate) => {
            touch(&candidate.path)?;
            Ok(Some(candidate.path.clone()))
        }
        Selection::Cancelled => Err(HidenError::Cancelled.into()),
    }
}

/// Ranked candidates whose labels match `query`, without any interaction.
pub fn list(config: &Config, source: &dyn RepoSource, query: &str) -> Result<Vec<Candidate>> {
    let tokens = query_tokens(query);
    let mut candidates = collect_candidates(config, source)?;
    candidates.retain(|c| label_matches(&c.label, &tokens));
    Ok(candidates)
}

/// Set access and modification time of `path` to now.
pub fn touch(path: &Path) -> Result<()> {
    let now = FileTime::now();
    set_file_times(path, now, now).context("failed to update timestamp")
}
