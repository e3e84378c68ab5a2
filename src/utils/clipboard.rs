// src/utils/clipboard.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Anything a generated password can be copied into.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

// System clipboard, opened on first use so a missing display only fails the copy
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string())),
            None => Err(ClipboardError::Unavailable("clipboard not initialized".to_string())),
        }
    }
}

/// Copy a password and return the line to show the user. Failures are
/// reported, never propagated.
pub fn copy_password<C: ClipboardSink + ?Sized>(clipboard: &mut C, password: &str) -> String {
    match clipboard.set_text(password) {
        Ok(()) => {
            log::debug!("Copied {} characters to the clipboard", password.len());
            "📋 Copied to clipboard".to_string()
        }
        Err(e) => {
            log::warn!("Clipboard copy failed: {}", e);
            format!("❌ {}", e)
        }
    }
}
