//! Core data types shared across the pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// Stash subdirectory name used when no configuration says otherwise.
pub const DEFAULT_DIRNAME: &str = ".hiden";

/// One file discovered inside a repository's stash directory.
///
/// `label` stays empty until the ranker has ordered the candidates; after that
/// the list is read-only and the selector only derives views over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Location of the file as reached through the stash directory.
    pub path: PathBuf,
    /// Path relative to the stash directory, always with `/` separators.
    pub relative_path: String,
    /// Base name of the owning repository root.
    pub repository: String,
    /// Modification time captured at scan time. Never re-read.
    pub modified_at: SystemTime,
    /// `"<date> <relative_path> [<repository>]"`, set by the ranker.
    pub label: String,
}

impl Candidate {
    pub fn new(
        path: PathBuf,
        relative_path: String,
        repository: String,
        modified_at: SystemTime,
    ) -> Self {
        Self { path, relative_path, repository, modified_at, label: String::new() }
    }
}

/// Settings read from the optional config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the stash subdirectory looked up in every repository.
    pub dirname: String,
    /// Upper bound on scan worker threads. `None` uses the shared pool.
    pub scan_threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self { dirname: DEFAULT_DIRNAME.to_string(), scan_threads: None }
    }
}

impl Config {
    /// Replace blank values with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.dirname.trim().is_empty() {
            self.dirname = DEFAULT_DIRNAME.to_string();
        }
        if self.scan_threads == Some(0) {
            self.scan_threads = None;
        }
        self
    }
}
