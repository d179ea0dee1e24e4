//! Clipboard access for the card's copy actions.

use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to set clipboard text: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait ClipboardSink {
    /// Write `text` verbatim.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard with an optional OSC 52 fallback for remote sessions.
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
    osc52_fallback: bool,
}

impl ClipboardHandler {
    pub fn new(osc52_fallback: bool) -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                tracing::warn!(error = %err, "System clipboard unavailable");
                None
            }
        };
        Self {
            clipboard,
            osc52_fallback,
        }
    }

    fn write_osc52(text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(osc52_sequence(text).as_bytes())?;
        stdout.flush()
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let system_error = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(text.to_string()) {
                Ok(()) => return Ok(()),
                Err(err) => ClipboardError::Write(err.to_string()),
            },
            None => ClipboardError::Unavailable("no system clipboard".to_string()),
        };

        if !self.osc52_fallback {
            return Err(system_error);
        }

        tracing::debug!(error = %system_error, "Falling back to OSC 52 clipboard");
        Self::write_osc52(text).map_err(|err| ClipboardError::Write(err.to_string()))
    }
}

/// Terminal escape that asks the emulator to set its clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}
