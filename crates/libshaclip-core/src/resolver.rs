//! The commit resolver: a priority-ordered fallback chain over
//! heterogeneous sources.
//!
//! Order: explicit sha argument, view-selected commit, line blame of the
//! target file (buffer-aware when dirty), most recent repository commit.
//! Each step only runs if the previous one produced nothing, and once a
//! sha is decided the chain short-circuits.
//!
//! Failure policy: backend errors are logged, reported once through the
//! notification sink, and swallowed. Absence of a target or of history is
//! a silent no-op. The public surface never returns an error.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::classify::classify;
use crate::facade::{ClipboardSink, GitQuery, NotificationSink};
use crate::types::{
    CommitRef, EditorState, HostContext, InvocationContext, Resolution, ResolutionArgs,
};

const COPY_FAILED_MESSAGE: &str = "Unable to copy commit id. See log output for more details";

/// Resolve a commit reference for the given invocation context.
///
/// The caller's `args` are copied, never mutated.
pub fn resolve<G, N>(
    context: &InvocationContext,
    args: &ResolutionArgs,
    git: &G,
    notifier: &mut N,
) -> Resolution
where
    G: GitQuery,
    N: NotificationSink,
{
    let mut args = args.clone();

    // Explicit caller argument short-circuits everything.
    if let Some(sha) = args.sha.take() {
        return Resolution::Commit(CommitRef::new(sha, context_uri(context)));
    }

    let (editor, uri) = match context {
        InvocationContext::ViewNode { commit } => return Resolution::Commit(commit.clone()),
        InvocationContext::Editor { editor, uri } => (editor.as_ref(), uri.as_deref()),
    };

    match uri {
        None => resolve_from_repo_head(editor, git, notifier),
        Some(uri) => resolve_from_blame(editor, uri, git, notifier),
    }
}

/// Classify, resolve, and dispatch to the result sink.
///
/// On a resolved commit the sha is written to the clipboard; on
/// `NoResult` nothing happens (absence of a target is not a user error);
/// on `Failed` the notification already went out during resolution.
pub fn resolve_and_copy<G, C, N>(
    context: &HostContext,
    args: &ResolutionArgs,
    git: &G,
    clipboard: &mut C,
    notifier: &mut N,
) -> Resolution
where
    G: GitQuery,
    C: ClipboardSink,
    N: NotificationSink,
{
    let classified = classify(context);
    let resolution = resolve(&classified, args, git, notifier);

    if let Resolution::Commit(commit) = &resolution {
        if let Err(e) = clipboard.write(&commit.sha) {
            return report(notifier, &e, "clipboard write");
        }
    }

    resolution
}

/// No target file: fall back to the most recent commit of the active
/// repository. Absence of a repository or of history is silent.
fn resolve_from_repo_head<G, N>(
    editor: Option<&EditorState>,
    git: &G,
    notifier: &mut N,
) -> Resolution
where
    G: GitQuery,
    N: NotificationSink,
{
    let hint = editor.map(|e| e.uri.as_path());

    let repo = match git.active_repo_path(hint) {
        Ok(Some(path)) => path,
        Ok(None) => return Resolution::NoResult,
        Err(e) => return report(notifier, &e, "active_repo_path"),
    };

    let log = match git.log_for_repo(&repo, 1) {
        Ok(log) => log,
        Err(e) => return report(notifier, &e, "log_for_repo(max_count=1)"),
    };

    match log.into_iter().next() {
        Some(commit) => Resolution::Commit(commit),
        None => Resolution::NoResult,
    }
}

/// A target file exists: blame it at the cursor line. Dirty buffers are
/// blamed against their in-memory contents; blaming disk content for a
/// dirty buffer would attribute the wrong commit to the line the user is
/// looking at.
fn resolve_from_blame<G, N>(
    editor: Option<&EditorState>,
    uri: &Path,
    git: &G,
    notifier: &mut N,
) -> Resolution
where
    G: GitQuery,
    N: NotificationSink,
{
    let line = editor.map(|e| e.cursor_line).unwrap_or(0);
    // Negative or absurdly large selections mean the host handed over a
    // bogus cursor; nothing to attribute.
    let line = match u32::try_from(line) {
        Ok(line) => line,
        Err(_) => return Resolution::NoResult,
    };

    let blame = match editor {
        // Best effort when the host marks the buffer dirty without
        // handing over its contents: blame what is on disk.
        Some(e) if e.dirty => match e.buffer.as_deref() {
            Some(contents) => git.blame_for_line_contents(uri, line, contents),
            None => git.blame_for_line(uri, line),
        },
        _ => git.blame_for_line(uri, line),
    };

    match blame {
        Ok(Some(blame)) => Resolution::Commit(blame.commit),
        Ok(None) => Resolution::NoResult,
        Err(e) => report(notifier, &e, &format!("blame_for_line({})", line)),
    }
}

/// Log a backend failure and surface it to the user exactly once.
fn report<N: NotificationSink>(
    notifier: &mut N,
    err: &dyn Display,
    operation: &str,
) -> Resolution {
    error!("{} failed: {}", operation, err);
    notifier.show_error(COPY_FAILED_MESSAGE);
    Resolution::Failed
}

fn context_uri(context: &InvocationContext) -> Option<PathBuf> {
    match context {
        InvocationContext::ViewNode { commit } => commit.source.clone(),
        InvocationContext::Editor { uri, .. } => uri.clone(),
    }
}
