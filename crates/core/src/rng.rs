//! RNG module - the randomness source for spawning balls
//!
//! Ball creation takes any [`rand::Rng`], so callers decide where randomness
//! comes from. [`SpawnRng`] is the concrete source the binary uses: entropy
//! seeded for real runs, fixed seeds for tests and benchmarks.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Error, Rng, RngCore, SeedableRng};

/// Seedable RNG used to spawn balls.
#[derive(Debug, Clone)]
pub struct SpawnRng(StdRng);

impl SpawnRng {
    /// Unpredictable seed from the OS.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::seeded(12345)
    }
}

impl RngCore for SpawnRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Uniform integer in `range` (min inclusive, max exclusive).
///
/// An empty range yields its start instead of panicking, so a one-cell wide
/// viewport still gets a ball.
pub fn randrange<R: Rng + ?Sized>(rng: &mut R, range: Range<i32>) -> i32 {
    if range.is_empty() {
        return range.start;
    }
    rng.gen_range(range)
}
