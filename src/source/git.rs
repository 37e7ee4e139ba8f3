//! Git work tree detection

use crate::error::HidenError;
use anyhow::Result;
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

/// Root of the git work tree containing `start`.
///
/// Returns [`HidenError::NotInGitRepo`] when no repository encloses `start` or
/// the enclosing one has no work tree.
pub fn find_repo_root(start: &Path) -> Result<PathBuf> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) if e.code() == ErrorCode::NotFound => return Err(HidenError::NotInGitRepo.into()),
        Err(e) => {
            return Err(anyhow::Error::new(e).context("failed to get git repository root"));
        }
    };

    let workdir = repo.workdir().ok_or(HidenError::NotInGitRepo)?;
    // git2 reports work trees with a trailing separator.
    Ok(workdir.components().collect())
}

#[cfg(test)]
mod tests {
    use super::find_repo_root;
    use crate::error::HidenError;
    use git2::Repository;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_repo_root_walks_up_from_subdirectory() {
        let temp = TempDir::new().expect("tmp");
        let root = temp.path().canonicalize().expect("canonical");
        Repository::init(&root).expect("git init");

        let subdir = root.join("src").join("lib");
        fs::create_dir_all(&subdir).expect("mkdir subdir");

        let found = find_repo_root(&subdir).expect("repo root");
        assert_eq!(found.canonicalize().expect("canonical"), root);
    }

    #[test]
    fn find_repo_root_outside_repository() {
        let temp = TempDir::new().expect("tmp");
        let dir = temp.path().join("plain");
        fs::create_dir_all(&dir).expect("mkdir");

        // Only meaningful when the temp dir itself is not inside a repository.
        if Repository::discover(&dir).is_ok() {
            return;
        }
        let err = find_repo_root(&dir).expect_err("not a repo");
        assert!(matches!(err.downcast_ref::<HidenError>(), Some(HidenError::NotInGitRepo)));
    }

    #[test]
    fn bare_repository_has_no_root() {
        let temp = TempDir::new().expect("tmp");
        Repository::init_bare(temp.path()).expect("bare init");

        let err = find_repo_root(temp.path()).expect_err("bare repo");
        assert!(matches!(err.downcast_ref::<HidenError>(), Some(HidenError::NotInGitRepo)));
    }
}
