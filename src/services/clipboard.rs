// src/services/clipboard.rs
//! System clipboard access for the share action.
//!
//! The clipboard is an external collaborator the service cannot rely on:
//! headless hosts have no clipboard at all, and desktop environments may
//! refuse access. Callers treat every error here as a non-fatal condition
//! and fall back to returning the share text in the response body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access is disabled by configuration")]
    Disabled,
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Scoped clipboard writer.
///
/// A fresh platform handle is acquired per write and released immediately;
/// no persistent clipboard handle is retained between calls.
#[derive(Debug, Clone)]
pub struct ClipboardService {
    enabled: bool,
}

impl ClipboardService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Build from the CLIPBOARD_ENABLED env var (default: enabled).
    pub fn from_env() -> Self {
        let enabled = std::env::var("CLIPBOARD_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .to_lowercase()
            != "false";
        Self::new(enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write `text` to the system clipboard.
    pub fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Disabled);
        }
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_clipboard_is_denied() {
        let clipboard = ClipboardService::new(false);
        let result = clipboard.copy_text("Resume ID: R_7F3K2M");
        assert!(matches!(result, Err(ClipboardError::Disabled)));
    }

    #[test]
    fn test_disabled_error_message() {
        let err = ClipboardService::new(false)
            .copy_text("anything")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "clipboard access is disabled by configuration"
        );
    }
}
