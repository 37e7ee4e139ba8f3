//! Repository sources
//!
//! A source yields the ordered set of repository roots to scan. An unavailable
//! or empty source is fatal for the whole run.

use crate::error::HidenError;
use anyhow::Result;
use std::path::PathBuf;

pub mod ghq;
pub mod git;

pub use ghq::GhqSource;
pub use git::find_repo_root;

pub trait RepoSource {
    /// Absolute repository roots, in the source's own order.
    fn repositories(&self) -> Result<Vec<PathBuf>>;
}

/// A caller-supplied list of repository roots.
#[derive(Debug, Clone, Default)]
pub struct FixedRepos {
    roots: Vec<PathBuf>,
}

impl FixedRepos {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl RepoSource for FixedRepos {
    fn repositories(&self) -> Result<Vec<PathBuf>> {
        if self.roots.is_empty() {
            return Err(HidenError::NoRepositories("the configured list".to_string()).into());
        }
        Ok(self.roots.clone())
    }
}
