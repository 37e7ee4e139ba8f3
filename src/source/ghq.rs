//! Repository listing through `ghq list --full-path`.

use super::RepoSource;
use crate::error::HidenError;
use anyhow::Result;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Lists repositories by running ghq.
#[derive(Debug, Clone)]
pub struct GhqSource {
    program: OsString,
}

impl Default for GhqSource {
    fn default() -> Self {
        Self { program: OsString::from("ghq") }
    }
}

impl GhqSource {
    /// Use a different executable in place of `ghq`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    fn command_line(&self) -> String {
        format!("{} list", self.program.to_string_lossy())
    }
}

impl RepoSource for GhqSource {
    fn repositories(&self) -> Result<Vec<PathBuf>> {
        let output =
            Command::new(&self.program).args(["list", "--full-path"]).output().map_err(|e| {
                HidenError::RepositorySourceUnavailable {
                    command: self.command_line(),
                    reason: e.to_string(),
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => msg.to_string(),
            };
            return Err(HidenError::RepositorySourceUnavailable {
                command: self.command_line(),
                reason,
            }
            .into());
        }

        let repos = parse_repo_list(&String::from_utf8_lossy(&output.stdout));
        if repos.is_empty() {
            return Err(HidenError::NoRepositories(self.command_line()).into());
        }
        tracing::debug!("{} returned {} repositories", self.command_line(), repos.len());
        Ok(repos)
    }
}

/// One repository per line; surrounding whitespace and blank lines are dropped.
pub fn parse_repo_list(output: &str) -> Vec<PathBuf> {
    output.lines().map(str::trim).filter(|line| !line.is_empty()).map(PathBuf::from).collect()
}
