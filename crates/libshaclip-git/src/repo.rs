//! Repository discovery.

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::GitError;

/// Discover the working directory of the active repository.
///
/// Starts from `hint` when given (a file hint starts from its directory),
/// the process working directory otherwise. Absence of a repository is
/// `Ok(None)`, not an error.
///
/// Uses git2::Repository::discover() which handles:
/// - Walking up directories to find .git
/// - Reading .git files (gitlinks) in worktrees
pub fn active_repo_path(hint: Option<&Path>) -> Result<Option<PathBuf>, GitError> {
    let start: PathBuf = match hint {
        Some(p) if p.is_file() => p.parent().unwrap_or(Path::new(".")).to_path_buf(),
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };

    match Repository::discover(&start) {
        Ok(repo) => Ok(repo.workdir().map(|p| p.to_path_buf())),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Locate the repository that owns `file` and return it together with the
/// workdir-relative path git2's blame expects.
pub(crate) fn repo_for_file(file: &Path) -> Result<(Repository, PathBuf), GitError> {
    let start = file.parent().unwrap_or(Path::new("."));
    let repo = Repository::discover(start)
        .map_err(|_| GitError::NotARepo(file.display().to_string()))?;

    let workdir = repo
        .workdir()
        .ok_or_else(|| GitError::NotARepo(file.display().to_string()))?
        .to_path_buf();

    // Canonicalize both sides so relative invocations and symlinked temp
    // directories still strip cleanly.
    let file_abs = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    let workdir_abs = workdir.canonicalize().unwrap_or(workdir);

    let relative = file_abs
        .strip_prefix(&workdir_abs)
        .map_err(|_| GitError::OutsideWorkTree(file.display().to_string()))?
        .to_path_buf();

    Ok((repo, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{commit_file, setup_test_repo};

    #[test]
    fn discovers_repo_from_file_hint() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "hello\n", "add a");

        let hint = temp.path().join("a.txt");
        let found = active_repo_path(Some(&hint)).unwrap().unwrap();
        assert_eq!(
            found.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn discovers_repo_from_directory_hint() {
        let temp = setup_test_repo();

        let found = active_repo_path(Some(temp.path())).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn no_repo_is_none_not_an_error() {
        let temp = tempfile::TempDir::new().unwrap();

        let found = active_repo_path(Some(temp.path())).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn relative_path_is_stripped_against_workdir() {
        let temp = setup_test_repo();
        std::fs::create_dir_all(temp.path().join("src")).unwrap();
        commit_file(temp.path(), "src/lib.rs", "pub fn f() {}\n", "add lib");

        let (_repo, rel) = repo_for_file(&temp.path().join("src/lib.rs")).unwrap();
        assert_eq!(rel, PathBuf::from("src/lib.rs"));
    }

    #[test]
    fn file_outside_any_repo_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("orphan.txt");
        std::fs::write(&file, "x\n").unwrap();

        assert!(matches!(
            repo_for_file(&file),
            Err(GitError::NotARepo(_))
        ));
    }
}
