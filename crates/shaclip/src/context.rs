//! Builds the resolver's host context from CLI arguments.

use std::io::Read;
use std::path::Path;

use libshaclip_core::{CommitRef, EditorState, HostContext, ResolutionArgs};

use crate::cli::Cli;
use crate::error::ShaclipError;

/// Build the host context and resolution arguments for this invocation.
///
/// `--contents` stands in for an editor's unsaved buffer: its presence
/// marks the document dirty and carries the in-memory text.
pub fn build_context(cli: &Cli) -> Result<(HostContext, ResolutionArgs), ShaclipError> {
    if cli.contents.is_some() && cli.file.is_none() {
        return Err(ShaclipError::InvalidArgs(
            "--contents requires a target FILE".to_string(),
        ));
    }

    let buffer = match &cli.contents {
        Some(path) => Some(read_contents(path)?),
        None => None,
    };

    let editor = cli.file.as_ref().map(|file| EditorState {
        uri: file.clone(),
        cursor_line: cli.line,
        dirty: buffer.is_some(),
        buffer: buffer.clone(),
    });

    let selected_commit = cli
        .selected
        .as_ref()
        .map(|sha| CommitRef::new(sha.clone(), cli.file.clone()));

    let host = HostContext {
        selected_commit,
        editor,
        uri: cli.file.clone(),
    };
    let args = ResolutionArgs {
        sha: cli.sha.clone(),
    };

    Ok((host, args))
}

fn read_contents(path: &Path) -> Result<String, ShaclipError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        ShaclipError::InvalidArgs(format!("cannot read contents file {}: {}", path.display(), e))
    })
}
