//! Core types module - shared data structures and constants
//!
//! Everything tunable about the animation lives here as a compile-time constant.
//! At runtime the constants are bundled into a [`Physics`] value so the ball
//! integrator and the frame pacer always agree on the same time step.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 32 | Frames per second (`dt = 1/32 s`) |
//! | `GRAVITY` | 128 | Downward acceleration, cells/s² |
//! | `ROLL_RESISTANCE` | 2 | Horizontal deceleration while on the floor, cells/s² |
//! | `SPAWN_VX_RANGE` | `-40..40` | Initial horizontal velocity |
//! | `SPAWN_VY_RANGE` | `-20..20` | Initial vertical velocity |
//! | `GLYPH_RANGE` | `33..126` | Printable ASCII codes a ball may be drawn with |
//!
//! # Examples
//!
//! ```
//! use bouncii_types::{Physics, Viewport, FRAME_RATE};
//!
//! let physics = Physics::default();
//! assert_eq!(physics.dt, 1.0 / FRAME_RATE as f32);
//!
//! let bounds = Viewport::new(80, 24).bounds();
//! assert_eq!((bounds.max_x, bounds.max_y), (79, 23));
//! ```

use std::ops::Range;
use std::time::Duration;

/// Frames per second; also fixes the physics time step.
pub const FRAME_RATE: u32 = 32;

/// Downward acceleration in cells per second squared.
pub const GRAVITY: f32 = 128.0;

/// Rolling resistance in cells per second squared.
pub const ROLL_RESISTANCE: f32 = 2.0;

/// Initial horizontal velocity range (min inclusive, max exclusive).
pub const SPAWN_VX_RANGE: Range<i32> = -40..40;

/// Initial vertical velocity range (min inclusive, max exclusive).
pub const SPAWN_VY_RANGE: Range<i32> = -20..20;

/// Glyph codes a ball may be drawn with (`!` through `|`).
pub const GLYPH_RANGE: Range<u8> = 33..126;

/// Character closing every screen row.
pub const ROW_TERMINATOR: char = '\n';

/// Background character for empty cells.
pub const BLANK: char = ' ';

/// Most verbose log level the binary will emit.
///
/// Kept at WARN because stderr shares the terminal with the animation.
pub const LOG_LEVEL: &str = "warn";

/// How a continuous position is snapped to a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// `2.5 -> 3`, matching C `round()`.
    #[default]
    HalfAwayFromZero,
    /// `2.5 -> 2` (banker's rounding).
    HalfEven,
}

impl Rounding {
    /// Round `v` to the nearest cell index.
    ///
    /// ```
    /// use bouncii_types::Rounding;
    ///
    /// assert_eq!(Rounding::HalfAwayFromZero.apply(2.5), 3);
    /// assert_eq!(Rounding::HalfEven.apply(2.5), 2);
    /// assert_eq!(Rounding::HalfEven.apply(3.5), 4);
    /// ```
    #[inline]
    pub fn apply(self, v: f32) -> i32 {
        match self {
            Rounding::HalfAwayFromZero => v.round() as i32,
            Rounding::HalfEven => v.round_ties_even() as i32,
        }
    }
}

/// Physics parameters shared by every ball and by the frame pacer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Time step in seconds.
    pub dt: f32,
    pub gravity: f32,
    pub roll_resistance: f32,
    pub rounding: Rounding,
}

impl Physics {
    /// Build physics for a given frame rate, using the default forces.
    pub fn from_frame_rate(frame_rate: u32) -> Self {
        Self {
            dt: 1.0 / frame_rate.max(1) as f32,
            gravity: GRAVITY,
            roll_resistance: ROLL_RESISTANCE,
            rounding: Rounding::default(),
        }
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Wall-clock length of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(self.dt)
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::from_frame_rate(FRAME_RATE)
    }
}

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Largest cell coordinates a ball may occupy.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            max_x: self.width.saturating_sub(1),
            max_y: self.height.saturating_sub(1),
        }
    }
}

/// Inclusive upper bounds of a ball's position; the lower bound is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_x: u16,
    pub max_y: u16,
}

impl Bounds {
    pub fn new(max_x: u16, max_y: u16) -> Self {
        Self { max_x, max_y }
    }
}
