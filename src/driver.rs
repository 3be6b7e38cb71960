//! Driver loop: glues the simulation to a key source and a frame sink.
//!
//! One [`Driver::step`] is one frame:
//!
//! 1. compose the frame (clear, stamp each ball, advance each ball)
//! 2. present it in a single write
//! 3. poll for a key without blocking; a press spawns a ball, an interrupt
//!    stops the loop, and no input sleeps for one frame interval
//!
//! The pacing interval comes from the same [`Physics`] the balls integrate
//! with, so animation speed and wall-clock rate cannot drift apart.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info};

use crate::core::Simulation;
use crate::input::{KeyInput, KeySource};
use crate::term::FrameSink;
use crate::types::{Physics, Viewport};

/// Frame pacing.
pub trait Pacer {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the thread for the interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Interrupted,
}

pub struct Driver<R> {
    sim: Simulation,
    rng: R,
    interval: Duration,
}

impl<R: Rng> Driver<R> {
    /// Driver with one ball already in flight.
    pub fn new(viewport: Viewport, physics: Physics, mut rng: R) -> Self {
        let sim = Simulation::with_first_ball(viewport, physics, &mut rng);
        Self {
            sim,
            rng,
            interval: physics.frame_interval(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Idle sleep between frames.
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }

    /// Run one frame.
    pub fn step<K, S, P>(&mut self, keys: &mut K, sink: &mut S, pacer: &mut P) -> Result<Flow>
    where
        K: KeySource + ?Sized,
        S: FrameSink + ?Sized,
        P: Pacer + ?Sized,
    {
        sink.present(self.sim.advance())?;

        match keys.poll_key()? {
            Some(KeyInput::Interrupt) => {
                debug!(frame = self.sim.frames(), "interrupt received");
                return Ok(Flow::Interrupted);
            }
            Some(KeyInput::Spawn) => {
                self.sim.spawn(&mut self.rng);
            }
            None => pacer.wait(self.interval),
        }

        Ok(Flow::Continue)
    }

    /// Step until interrupted. Returns the number of frames shown.
    pub fn run<K, S, P>(&mut self, keys: &mut K, sink: &mut S, pacer: &mut P) -> Result<u64>
    where
        K: KeySource + ?Sized,
        S: FrameSink + ?Sized,
        P: Pacer + ?Sized,
    {
        let viewport = self.sim.viewport();
        info!(
            width = viewport.width,
            height = viewport.height,
            interval_ms = self.interval.as_secs_f32() * 1000.0,
            "animation started"
        );

        while self.step(keys, sink, pacer)? == Flow::Continue {}

        info!(
            frames = self.sim.frames(),
            balls = self.sim.balls().len(),
            "animation stopped"
        );
        Ok(self.sim.frames())
    }
}
