//! Error taxonomy for failures that cross a phase boundary.
//!
//! Scan-level problems never show up here; the scanner swallows them.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HidenError {
    /// The user closed the selector without picking anything.
    #[error("cancelled")]
    Cancelled,

    #[error("no repositories found via {0}")]
    NoRepositories(String),

    #[error("failed to run '{command}': {reason} (is it installed?)")]
    RepositorySourceUnavailable { command: String, reason: String },

    /// No terminal could be attached and there was nothing to auto-select.
    #[error("failed to open the terminal and no files are available: {0}")]
    NoInteractiveSurface(#[source] io::Error),

    #[error("not in a git repository")]
    NotInGitRepo,
}
