//! git2-backed query facade for shaclip.
//!
//! Implements the `GitQuery` trait from `libshaclip-core`: single-line
//! blame against committed or in-memory content, repository log, and
//! repository discovery. All queries are short point lookups; absence
//! (untracked file, unborn branch, no repository) is `Ok(None)` or an
//! empty vec, never an error.

mod blame;
mod error;
mod log;
mod repo;

pub use blame::{blame_for_line, blame_for_line_contents};
pub use error::GitError;
pub use log::log_for_repo;
pub use repo::active_repo_path;

use std::path::{Path, PathBuf};

use libshaclip_core::{BlameLine, CommitRef, GitQuery};

/// git2-backed implementation of the core query facade.
///
/// An optional root overrides the process working directory as the
/// starting point for repository discovery when the caller gives no hint.
#[derive(Debug, Default)]
pub struct GitQueries {
    root: Option<PathBuf>,
}

impl GitQueries {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl GitQuery for GitQueries {
    type Error = GitError;

    fn blame_for_line(&self, file: &Path, line: u32) -> Result<Option<BlameLine>, GitError> {
        blame::blame_for_line(file, line)
    }

    fn blame_for_line_contents(
        &self,
        file: &Path,
        line: u32,
        contents: &str,
    ) -> Result<Option<BlameLine>, GitError> {
        blame::blame_for_line_contents(file, line, contents)
    }

    fn log_for_repo(&self, repo: &Path, max_count: usize) -> Result<Vec<CommitRef>, GitError> {
        log::log_for_repo(repo, max_count)
    }

    fn active_repo_path(&self, hint: Option<&Path>) -> Result<Option<PathBuf>, GitError> {
        repo::active_repo_path(hint.or(self.root.as_deref()))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::Path;
    use std::process::Command;

    use tempfile::TempDir;

    pub fn setup_test_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        run_git(temp.path(), &["init"]);
        run_git(temp.path(), &["config", "user.name", "test"]);
        run_git(temp.path(), &["config", "user.email", "test@example.com"]);
        temp
    }

    pub fn run_git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn commit_file(dir: &Path, name: &str, contents: &str, message: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
        run_git(dir, &["add", name]);
        run_git(dir, &["commit", "-m", message]);
    }

    pub fn head_sha(dir: &Path) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(dir)
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}
