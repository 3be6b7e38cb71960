//! Terminal output module.
//!
//! The simulation composes a whole frame as text; this crate is the thin layer
//! that owns the terminal mode and paints that text in one write per frame.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Restore the terminal on every exit path
//! - Let the driver be tested against a fake [`FrameSink`]

pub mod renderer;

pub use bouncii_types as types;

pub use renderer::{encode_frame_into, FrameSink, TerminalRenderer};
