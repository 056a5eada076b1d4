//! Repository log queries.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use libshaclip_core::CommitRef;

use crate::GitError;

/// Most recent commits of the repository at `repo_path`, newest first, at
/// most `max_count` entries. An unborn branch yields an empty log, not an
/// error.
pub fn log_for_repo(repo_path: &Path, max_count: usize) -> Result<Vec<CommitRef>, GitError> {
    debug!("log {} max_count {}", repo_path.display(), max_count);
    let repo = Repository::discover(repo_path)
        .map_err(|_| GitError::NotARepo(repo_path.display().to_string()))?;

    let mut walk = repo.revwalk()?;
    match walk.push_head() {
        Ok(()) => {}
        Err(e)
            if matches!(
                e.code(),
                git2::ErrorCode::NotFound | git2::ErrorCode::UnbornBranch
            ) =>
        {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    }

    let mut commits = Vec::with_capacity(max_count);
    for oid in walk {
        if commits.len() == max_count {
            break;
        }
        let oid = oid?;
        commits.push(CommitRef::new(
            oid.to_string(),
            Some(repo_path.to_path_buf()),
        ));
    }

    Ok(commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{commit_file, head_sha, setup_test_repo};

    #[test]
    fn returns_head_first_and_honors_max_count() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\n", "first");
        commit_file(temp.path(), "a.txt", "one\ntwo\n", "second");
        let head = head_sha(temp.path());

        let log = log_for_repo(temp.path(), 1).unwrap();

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].sha, head);
    }

    #[test]
    fn walks_history_newest_first() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\n", "first");
        commit_file(temp.path(), "a.txt", "one\ntwo\n", "second");
        let head = head_sha(temp.path());

        let log = log_for_repo(temp.path(), 10).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log[0].sha, head);
    }

    #[test]
    fn unborn_branch_is_an_empty_log() {
        let temp = setup_test_repo();

        let log = log_for_repo(temp.path(), 1).unwrap();
        assert!(log.is_empty());
    }
}
