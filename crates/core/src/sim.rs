//! Simulation: the ball list plus the screen it is drawn into.
//!
//! This module is pure (no I/O). The driver decides when to advance a frame and
//! when to spawn; the simulation only knows how.

use rand::Rng;
use tracing::{debug, trace};

use crate::ball::Ball;
use crate::screen::ScreenBuffer;
use crate::types::{Physics, Viewport};

#[derive(Debug, Clone)]
pub struct Simulation {
    viewport: Viewport,
    physics: Physics,
    balls: Vec<Ball>,
    screen: ScreenBuffer,
    frame: String,
    frames: u64,
}

impl Simulation {
    /// Empty simulation sized to `viewport`.
    pub fn new(viewport: Viewport, physics: Physics) -> Self {
        let screen = ScreenBuffer::new(viewport.width, viewport.height);
        let frame = String::with_capacity(screen.cells().len());
        Self {
            viewport,
            physics,
            balls: Vec::new(),
            screen,
            frame,
            frames: 0,
        }
    }

    /// Simulation with its first ball already spawned.
    pub fn with_first_ball<R: Rng + ?Sized>(viewport: Viewport, physics: Physics, rng: &mut R) -> Self {
        let mut sim = Self::new(viewport, physics);
        sim.spawn(rng);
        sim
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    /// Balls in spawn order.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Add a ball sized to the viewport.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Ball {
        let ball = Ball::new(self.viewport.bounds(), self.physics, rng);
        debug!(
            count = self.balls.len() + 1,
            x = ball.x,
            vx = ball.vx,
            vy = ball.vy,
            glyph = %ball.glyph(),
            "spawned ball"
        );
        self.balls.push(ball);
        &self.balls[self.balls.len() - 1]
    }

    /// Add a prepared ball. Its bounds must match the viewport.
    pub fn push(&mut self, ball: Ball) {
        debug_assert!(
            ball.bounds() == self.viewport.bounds(),
            "ball bounds {:?} do not match viewport bounds {:?}",
            ball.bounds(),
            self.viewport.bounds()
        );
        self.balls.push(ball);
    }

    /// Compose one frame and advance every ball.
    ///
    /// Each ball is stamped at its current position before its update, so
    /// the returned text shows the pre-update state.
    pub fn advance(&mut self) -> &str {
        self.screen.clear();

        let drawable = self.viewport.width > 0 && self.viewport.height > 0;
        for ball in &mut self.balls {
            if drawable {
                self.screen
                    .set(ball.position_x() as u16, ball.position_y() as u16, ball.glyph());
            }
            ball.update();
        }

        self.frame.clear();
        self.screen.render_into(&mut self.frame);
        self.frames += 1;
        trace!(frame = self.frames, balls = self.balls.len(), "frame composed");
        &self.frame
    }

    /// Text of the most recently composed frame.
    pub fn frame_text(&self) -> &str {
        &self.frame
    }
}
