//! Per-repository stash walker with concurrent fan-out.

use crate::domain::Candidate;
use crate::utils::{base_name, relative_slash_path};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Finds every file under `<repo>/<dirname>` for a set of repositories.
pub struct StashScanner {
    dirname: String,
    threads: Option<usize>,
}

impl StashScanner {
    /// Create a scanner for the given stash subdirectory name.
    pub fn new(dirname: impl Into<String>) -> Self {
        Self { dirname: dirname.into(), threads: None }
    }

    /// Bound the number of worker threads. `None` uses rayon's global pool.
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|&n| n > 0);
        self
    }

    /// Scan every repository concurrently and merge the results.
    ///
    /// Ordering of the returned candidates is unspecified.
    pub fn scan_all(&self, repos: &[PathBuf]) -> Vec<Candidate> {
        let run = || -> Vec<Vec<Candidate>> {
            repos.par_iter().map(|repo| self.scan_repository(repo)).collect()
        };

        let per_repo = match self.threads {
            Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(run),
                Err(e) => {
                    tracing::warn!("Falling back to the global scan pool: {}", e);
                    run()
                }
            },
            None => run(),
        };

        let candidates: Vec<Candidate> = per_repo.into_iter().flatten().collect();
        tracing::debug!(
            "Scanned {} repositories, found {} candidates",
            repos.len(),
            candidates.len()
        );
        candidates
    }

    /// Collect the files of a single repository's stash directory.
    ///
    /// A missing stash directory, or one that is not a directory, yields
    /// nothing. Entries that cannot be read are skipped.
    pub fn scan_repository(&self, repo: &Path) -> Vec<Candidate> {
        let stash_dir = repo.join(&self.dirname);
        // fs::metadata follows a symlinked stash directory.
        match fs::metadata(&stash_dir) {
            Ok(meta) if meta.is_dir() => {}
            _ => return Vec::new(),
        }

        let repository = base_name(repo);
        let mut candidates = Vec::new();

        let walker = WalkDir::new(&stash_dir).follow_root_links(true).follow_links(false);
        for entry in walker.into_iter().filter_map(Result::ok) {
            let Some(modified_at) = file_modified_at(&entry) else {
                continue;
            };
            let Some(relative_path) = relative_slash_path(entry.path(), &stash_dir) else {
                continue;
            };
            candidates.push(Candidate::new(
                entry.path().to_path_buf(),
                relative_path,
                repository.clone(),
                modified_at,
            ));
        }

        tracing::debug!("{}: {} files in {}", repository, candidates.len(), self.dirname);
        candidates
    }
}

/// Modification time of a file entry, or `None` for directories and entries
/// that cannot be inspected. Symlinks count when their target is a regular file.
fn file_modified_at(entry: &DirEntry) -> Option<std::time::SystemTime> {
    let file_type = entry.file_type();
    let meta = if file_type.is_file() {
        entry.metadata().ok()?
    } else if file_type.is_symlink() {
        let target = fs::metadata(entry.path()).ok()?;
        if !target.is_file() {
            return None;
        }
        target
    } else {
        return None;
    };
    meta.modified().ok()
}
