//! Result sinks: clipboard writers and the stderr notification surface.

use std::convert::Infallible;

use libshaclip_core::{ClipboardSink, NotificationSink};

/// System clipboard writer backed by arboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    type Error = arboard::Error;

    fn write(&mut self, text: &str) -> Result<(), arboard::Error> {
        // A fresh handle per write; one write happens per invocation.
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())
    }
}

/// Clipboard sink that drops the value (`--no-copy`).
pub struct NullClipboard;

impl ClipboardSink for NullClipboard {
    type Error = Infallible;

    fn write(&mut self, _text: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Error reporter writing to stderr.
pub struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn show_error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}
