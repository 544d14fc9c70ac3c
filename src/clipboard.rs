//! System clipboard access

use crate::error::{ProofreadError, ProofreadResult};
use arboard::Clipboard;
use tracing::debug;

/// Read/write access to the shared clipboard
pub trait ClipboardAccess {
    /// Current clipboard text; `""` when it holds no text
    fn get_text(&mut self) -> ProofreadResult<String>;

    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> ProofreadResult<()>;
}

/// The desktop clipboard, via arboard.
///
/// On X11 the contents we set are served by this process, so it must stay
/// alive until the paste has been handled.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> ProofreadResult<Self> {
        let inner = Clipboard::new().map_err(|e| {
            ProofreadError::Clipboard(format!("Failed to access system clipboard: {e}"))
        })?;
        Ok(Self { inner })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn get_text(&mut self) -> ProofreadResult<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("Clipboard holds no text");
                Ok(String::new())
            }
            Err(e) => Err(ProofreadError::Clipboard(format!(
                "Failed to read clipboard: {e}"
            ))),
        }
    }

    fn set_text(&mut self, text: &str) -> ProofreadResult<()> {
        self.inner
            .set_text(text)
            .map_err(|e| ProofreadError::Clipboard(format!("Failed to copy text to clipboard: {e}")))
    }
}
