use std::path::PathBuf;

use serde::Serialize;

/// Reference to a single commit in version-control history.
///
/// Immutable value object; a new one is constructed at every derivation
/// site, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRef {
    /// Full or abbreviated hex object id
    pub sha: String,
    /// File or repository the reference was derived from
    pub source: Option<PathBuf>,
}

impl CommitRef {
    pub fn new(sha: impl Into<String>, source: Option<PathBuf>) -> Self {
        Self {
            sha: sha.into(),
            source,
        }
    }
}

/// The host editor's view of the target file at invocation time.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Path of the document shown in the editor
    pub uri: PathBuf,
    /// Current selection line, 0-indexed. May be negative if the host
    /// hands over a bogus selection; the resolver checks for that.
    pub cursor_line: i64,
    /// Whether the document has unsaved modifications
    pub dirty: bool,
    /// In-memory contents when dirty
    pub buffer: Option<String>,
}

/// Raw context handed over by the host at invocation time, before
/// classification. Everything is optional; the classifier picks the most
/// specific variant available.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    /// Commit already selected in a host view (history panel, etc.)
    pub selected_commit: Option<CommitRef>,
    /// Active editor, if any
    pub editor: Option<EditorState>,
    /// Explicit target file, if any
    pub uri: Option<PathBuf>,
}

/// Classified invocation context. Exactly one variant per invocation.
#[derive(Debug, Clone)]
pub enum InvocationContext {
    /// A commit was already selected in a host view; no lookup needed.
    ViewNode { commit: CommitRef },
    /// The ambient editor context; either part may be absent.
    Editor {
        editor: Option<EditorState>,
        uri: Option<PathBuf>,
    },
}

/// Optional explicit arguments for a resolution pass.
///
/// Passed by value through the chain; the resolver copies it before use so
/// the caller's original is never touched.
#[derive(Debug, Clone, Default)]
pub struct ResolutionArgs {
    /// Pre-supplied commit id; short-circuits every lookup
    pub sha: Option<String>,
}

/// Per-line blame attribution.
#[derive(Debug, Clone)]
pub struct BlameLine {
    /// Commit that last modified the line
    pub commit: CommitRef,
    /// Line number, 0-indexed
    pub line: u32,
    /// True when the line only exists in uncommitted changes
    pub is_uncommitted: bool,
}

/// Outcome of a resolution pass.
///
/// `NoResult` is a legitimate "nothing to do" (no target, no history) and
/// stays silent. `Failed` means a backend error was already logged and
/// reported through the notification sink; it never carries the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Commit(CommitRef),
    NoResult,
    Failed,
}
