use crate::types::{HostContext, InvocationContext};

/// Classify a raw host context into exactly one invocation variant.
///
/// A pre-selected commit wins over everything else; otherwise the editor
/// context is carried as-is, with the explicit uri falling back to the
/// active editor's document. Pure function, no side effects.
pub fn classify(context: &HostContext) -> InvocationContext {
    match &context.selected_commit {
        Some(commit) => InvocationContext::ViewNode {
            commit: commit.clone(),
        },
        None => InvocationContext::Editor {
            editor: context.editor.clone(),
            uri: context
                .uri
                .clone()
                .or_else(|| context.editor.as_ref().map(|e| e.uri.clone())),
        },
    }
}
