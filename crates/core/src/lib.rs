//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the ball physics and the off-screen frame buffer. It has
//! **no dependencies** on terminal I/O:
//!
//! - **Deterministic**: the RNG is injected, so a fixed seed replays a run
//! - **Testable**: every physics rule is checked in unit tests
//! - **Allocation-light**: the frame text is rebuilt into a reused `String`
//!
//! # Module Structure
//!
//! - [`ball`]: one ball's kinematic state and its time step
//! - [`screen`]: character grid for one frame, bottom-left origin
//! - [`sim`]: ball list plus screen, advanced one frame at a time
//! - [`rng`]: seedable randomness source for spawning
//!
//! # Physics
//!
//! Each step reflects off walls the ball is touching, applies rolling
//! resistance on the floor, applies gravity, integrates, and clamps. With the
//! default 32 Hz frame rate:
//!
//! - **Gravity**: 128 cells/s² (4 cells/s lost per frame)
//! - **Rolling resistance**: 2 cells/s² (1/16 cell/s lost per frame)
//!
//! # Example
//!
//! ```
//! use bouncii_core::{Simulation, SpawnRng};
//! use bouncii_types::{Physics, Viewport};
//!
//! let mut rng = SpawnRng::seeded(7);
//! let mut sim = Simulation::with_first_ball(Viewport::new(40, 12), Physics::default(), &mut rng);
//!
//! let frame = sim.advance();
//! assert_eq!(frame.lines().count(), 12);
//!
//! sim.spawn(&mut rng);
//! assert_eq!(sim.balls().len(), 2);
//! ```

pub mod ball;
pub mod rng;
pub mod screen;
pub mod sim;

pub use bouncii_types as types;

pub use ball::Ball;
pub use rng::{randrange, SpawnRng};
pub use screen::ScreenBuffer;
pub use sim::Simulation;
