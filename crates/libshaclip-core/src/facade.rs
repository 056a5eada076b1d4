//! Traits for the resolver's external collaborators.
//!
//! The resolver only ever issues point queries: one blame or log call at a
//! time, strictly sequential, each step gated on the previous one coming
//! up empty. Implementations own their latency; no timeouts here.

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::types::{BlameLine, CommitRef};

/// Version-control query backend.
///
/// `Ok(None)` / an empty log mean "nothing there" (untracked file, unborn
/// branch) and are not errors; `Err` is reserved for backend failures.
pub trait GitQuery {
    type Error: Error;

    /// Blame the committed contents of `file` at `line` (0-indexed).
    fn blame_for_line(&self, file: &Path, line: u32)
        -> Result<Option<BlameLine>, Self::Error>;

    /// Blame `file` at `line` against the given in-memory contents
    /// instead of what is on disk.
    fn blame_for_line_contents(
        &self,
        file: &Path,
        line: u32,
        contents: &str,
    ) -> Result<Option<BlameLine>, Self::Error>;

    /// Most recent commits of the repository at `repo`, newest first, at
    /// most `max_count` entries.
    fn log_for_repo(&self, repo: &Path, max_count: usize)
        -> Result<Vec<CommitRef>, Self::Error>;

    /// Working directory of the active repository, discovered from `hint`
    /// when given. Absence is `Ok(None)`, not an error.
    fn active_repo_path(&self, hint: Option<&Path>)
        -> Result<Option<PathBuf>, Self::Error>;
}

/// Write-only result sink; last writer wins, one write per invocation.
pub trait ClipboardSink {
    type Error: Error;

    fn write(&mut self, text: &str) -> Result<(), Self::Error>;
}

/// User-facing error surface. Shown at most once per invocation.
pub trait NotificationSink {
    fn show_error(&mut self, message: &str);
}
