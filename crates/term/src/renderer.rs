//! TerminalRenderer: puts composed frames on a real terminal.
//!
//! The renderer owns the terminal mode. [`TerminalRenderer::enter`] switches to
//! raw mode on the alternate screen, and the terminal is restored either by an
//! explicit [`TerminalRenderer::exit`] or, failing that, when the renderer is
//! dropped (early return, error, or panic unwind).

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use tracing::{info, warn};

use crate::types::{Viewport, ROW_TERMINATOR};

/// Destination for composed frames.
pub trait FrameSink {
    /// Show one complete frame, top row first, rows ending in
    /// [`ROW_TERMINATOR`].
    fn present(&mut self, frame: &str) -> Result<()>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    /// Current terminal size.
    pub fn viewport() -> Result<Viewport> {
        let (w, h) = terminal::size().context("failed to query terminal size")?;
        Ok(Viewport::new(w, h))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        info!("terminal entered raw mode");
        Ok(())
    }

    /// Restore the terminal. Calling this when not entered is a no-op.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        info!("terminal restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, frame: &str) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Encode a full frame into `out`.
///
/// Raw mode does not return the carriage on `'\n'`, so each row is placed
/// with an explicit cursor move instead of printing the terminator.
pub fn encode_frame_into(frame: &str, out: &mut Vec<u8>) -> Result<()> {
    for (row, line) in frame.split_terminator(ROW_TERMINATOR).enumerate() {
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
