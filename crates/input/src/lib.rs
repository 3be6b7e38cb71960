//! Terminal input module (driver-facing).
//!
//! Maps `crossterm` events into [`KeyInput`] and exposes a non-blocking
//! [`KeySource`] so the driver loop can be exercised without a terminal.

pub mod map;
pub mod poll;

pub use bouncii_types as types;

pub use map::{handle_event, handle_key_event, is_interrupt, KeyInput};
pub use poll::{KeySource, TerminalKeys};
