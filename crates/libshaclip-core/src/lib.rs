//! Core library for shaclip.
//!
//! Owns the commit resolution policy: given an invocation context (an open
//! file, a cursor position, a pre-selected commit, or nothing at all),
//! decide exactly one commit id to hand to the result sink. The version
//! control backend, clipboard, and notification surface are traits defined
//! in [`facade`] so the policy can be exercised without a real repository.

pub mod classify;
pub mod facade;
pub mod resolver;
pub mod types;

pub use classify::classify;
pub use facade::{ClipboardSink, GitQuery, NotificationSink};
pub use resolver::{resolve, resolve_and_copy};
pub use types::{
    BlameLine, CommitRef, EditorState, HostContext, InvocationContext, Resolution,
    ResolutionArgs,
};
