//! Non-blocking key polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use tracing::trace;

use crate::map::{handle_event, KeyInput};

/// Source of key presses for the driver.
pub trait KeySource {
    /// Return the next meaningful key press, or `None` if nothing is pending.
    ///
    /// Must not block.
    fn poll_key(&mut self) -> Result<Option<KeyInput>>;
}

/// Reads keys from the real terminal via crossterm.
///
/// Events that map to nothing (releases, resizes, mouse) are drained so one
/// press always yields exactly one [`KeyInput`].
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<KeyInput>> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(input) = handle_event(ev) {
                return Ok(Some(input));
            }
            trace!("ignored terminal event");
        }
        Ok(None)
    }
}
