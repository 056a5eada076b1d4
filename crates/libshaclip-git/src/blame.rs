//! Single-line blame queries.
//!
//! Lines are 0-indexed at this boundary; git2 hunks are 1-indexed. A line
//! with no attribution (untracked file, line past end of file) is
//! `Ok(None)`, never an error.

use std::path::Path;

use git2::Blame;
use tracing::debug;

use libshaclip_core::{BlameLine, CommitRef};

use crate::repo::repo_for_file;
use crate::GitError;

/// Blame the committed contents of `file` at `line`.
pub fn blame_for_line(file: &Path, line: u32) -> Result<Option<BlameLine>, GitError> {
    debug!("blame {} line {}", file.display(), line);
    let (repo, relative) = repo_for_file(file)?;

    let blame = match repo.blame_file(&relative, None) {
        Ok(blame) => blame,
        Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(hunk_for_line(&blame, file, line))
}

/// Blame `file` at `line` against the given in-memory contents instead of
/// what is on disk. Lines only present in the buffer attribute to the
/// zero id and are flagged uncommitted.
pub fn blame_for_line_contents(
    file: &Path,
    line: u32,
    contents: &str,
) -> Result<Option<BlameLine>, GitError> {
    debug!("buffer blame {} line {}", file.display(), line);
    let (repo, relative) = repo_for_file(file)?;

    let base = match repo.blame_file(&relative, None) {
        Ok(blame) => blame,
        Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let blame = base.blame_buffer(contents.as_bytes())?;

    Ok(hunk_for_line(&blame, file, line))
}

fn hunk_for_line(blame: &Blame<'_>, file: &Path, line: u32) -> Option<BlameLine> {
    // git2 lines are 1-indexed
    let hunk = blame.get_line(line as usize + 1)?;
    let oid = hunk.final_commit_id();

    Some(BlameLine {
        commit: CommitRef::new(oid.to_string(), Some(file.to_path_buf())),
        line,
        is_uncommitted: oid.is_zero(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{commit_file, head_sha, setup_test_repo};

    #[test]
    fn attributes_committed_line_to_its_commit() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\ntwo\n", "add a");
        let head = head_sha(temp.path());

        let blame = blame_for_line(&temp.path().join("a.txt"), 1)
            .unwrap()
            .unwrap();

        assert_eq!(blame.commit.sha, head);
        assert_eq!(blame.line, 1);
        assert!(!blame.is_uncommitted);
    }

    #[test]
    fn line_past_end_of_file_is_none() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\n", "add a");

        let blame = blame_for_line(&temp.path().join("a.txt"), 10).unwrap();
        assert!(blame.is_none());
    }

    #[test]
    fn untracked_file_is_none() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\n", "add a");
        std::fs::write(temp.path().join("new.txt"), "fresh\n").unwrap();

        let blame = blame_for_line(&temp.path().join("new.txt"), 0).unwrap();
        assert!(blame.is_none());
    }

    #[test]
    fn buffer_blame_keeps_attribution_of_unchanged_lines() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\ntwo\n", "add a");
        let head = head_sha(temp.path());

        // line 0 edited in the buffer, line 1 untouched
        let buffer = "edited\ntwo\n";
        let blame = blame_for_line_contents(&temp.path().join("a.txt"), 1, buffer)
            .unwrap()
            .unwrap();

        assert_eq!(blame.commit.sha, head);
        assert!(!blame.is_uncommitted);
    }

    #[test]
    fn buffer_blame_flags_edited_lines_uncommitted() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\ntwo\n", "add a");

        let buffer = "edited\ntwo\n";
        let blame = blame_for_line_contents(&temp.path().join("a.txt"), 0, buffer)
            .unwrap()
            .unwrap();

        assert!(blame.is_uncommitted);
    }

    #[test]
    fn second_commit_wins_for_its_own_lines() {
        let temp = setup_test_repo();
        commit_file(temp.path(), "a.txt", "one\n", "add a");
        let first = head_sha(temp.path());
        commit_file(temp.path(), "a.txt", "one\nappended\n", "append");
        let second = head_sha(temp.path());

        let line0 = blame_for_line(&temp.path().join("a.txt"), 0)
            .unwrap()
            .unwrap();
        let line1 = blame_for_line(&temp.path().join("a.txt"), 1)
            .unwrap()
            .unwrap();

        assert_eq!(line0.commit.sha, first);
        assert_eq!(line1.commit.sha, second);
    }
}
