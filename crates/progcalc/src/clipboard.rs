//! Clipboard access for the programmer panel's copy buttons
//!
//! Copying is fire-and-forget: a failure is logged and otherwise ignored,
//! the calculator carries on either way.

use std::fmt;

use tracing::debug;

/// Somewhere copied text can go
pub trait Clipboard: fmt::Debug {
    /// Places `text` on the clipboard. Never fails outward.
    fn copy(&mut self, text: &str);
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn copy(&mut self, text: &str) {
        (**self).copy(text);
    }
}

/// In-memory clipboard that keeps every copy, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    copies: Vec<String>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything copied so far
    #[must_use]
    pub fn copies(&self) -> &[String] {
        &self.copies
    }

    /// The most recent copy
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) {
        debug!(text, "copied to in-memory clipboard");
        self.copies.push(text.to_string());
    }
}

/// The desktop clipboard via `arboard`
///
/// The handle is opened on first use and kept, since on X11 the copied
/// text only stays available while its owner is alive.
#[cfg(feature = "system-clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "system-clipboard")]
impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Creates a clipboard that connects lazily
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or(arboard::Error::ClipboardNotSupported)
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) {
        let result = self
            .handle()
            .and_then(|clipboard| clipboard.set_text(text.to_string()));
        match result {
            Ok(()) => debug!(text, "copied to system clipboard"),
            Err(err) => {
                tracing::warn!(error = %err, "failed to copy to clipboard");
                // Retry with a fresh connection next time
                self.inner = None;
            }
        }
    }
}
