//! A single bouncing ball.
//!
//! The ball lives in a continuous coordinate space with the origin at the
//! bottom-left of the viewport. Each [`Ball::update`] is one explicit Euler
//! step followed by a clamp back into bounds. Reflection only fires when the
//! ball sits exactly on a wall, which is exactly where the clamp leaves it.

use rand::Rng;

use crate::rng::randrange;
use crate::types::{Bounds, Physics, GLYPH_RANGE, SPAWN_VX_RANGE, SPAWN_VY_RANGE};

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    max_x: f32,
    max_y: f32,
    physics: Physics,
    glyph: char,
}

impl Ball {
    /// Spawn a ball just below the top edge at a random column, with random
    /// velocity and glyph.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, physics: Physics, rng: &mut R) -> Self {
        let max_x = i32::from(bounds.max_x);
        let max_y = i32::from(bounds.max_y);

        let x = if max_x > 1 {
            randrange(rng, 1..max_x)
        } else {
            0
        };
        let y = (max_y - 1).max(0);
        let vx = randrange(rng, SPAWN_VX_RANGE);
        let vy = randrange(rng, SPAWN_VY_RANGE);
        let code = rng.gen_range(GLYPH_RANGE);

        Self {
            x: x as f32,
            y: y as f32,
            vx: vx as f32,
            vy: vy as f32,
            max_x: max_x as f32,
            max_y: max_y as f32,
            physics,
            glyph: char::from(code),
        }
    }

    /// Build a ball from explicit state. Position is clamped into `bounds`.
    pub fn with_state(
        bounds: Bounds,
        physics: Physics,
        (x, y): (f32, f32),
        (vx, vy): (f32, f32),
        glyph: char,
    ) -> Self {
        let max_x = f32::from(bounds.max_x);
        let max_y = f32::from(bounds.max_y);
        Self {
            x: x.clamp(0.0, max_x),
            y: y.clamp(0.0, max_y),
            vx,
            vy,
            max_x,
            max_y,
            physics,
            glyph,
        }
    }

    /// Advance one time step.
    pub fn update(&mut self) {
        let Physics {
            dt,
            gravity,
            roll_resistance,
            ..
        } = self.physics;

        if self.x == 0.0 || self.x == self.max_x {
            self.vx = -self.vx;
        }
        if self.y == 0.0 || self.y == self.max_y {
            self.vy = -self.vy;
        }

        // Rolling on the floor. Both checks run in turn: a small positive vx
        // may overshoot past zero, a small negative one is pushed back.
        if self.position_y() == 0 {
            if self.vx < 0.0 {
                self.vx += roll_resistance * dt;
            }
            if self.vx > 0.0 {
                self.vx -= roll_resistance * dt;
            }
        }

        self.vy -= gravity * dt;

        self.x += self.vx * dt;
        self.y += self.vy * dt;

        self.x = self.x.clamp(0.0, self.max_x);
        self.y = self.y.clamp(0.0, self.max_y);
    }

    /// Column the ball is drawn in.
    #[inline]
    pub fn position_x(&self) -> i32 {
        self.physics.rounding.apply(self.x)
    }

    /// Row the ball is drawn in, counted from the bottom.
    #[inline]
    pub fn position_y(&self) -> i32 {
        self.physics.rounding.apply(self.y)
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.max_x as u16, self.max_y as u16)
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SpawnRng;
    use crate::types::Rounding;

    fn physics() -> Physics {
        Physics::default()
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = SpawnRng::seeded(42);
        let bounds = Bounds::new(79, 23);
        for _ in 0..500 {
            let b = Ball::new(bounds, physics(), &mut rng);
            assert!(b.x >= 1.0 && b.x < 79.0);
            assert_eq!(b.y, 22.0);
            assert!(b.vx >= -40.0 && b.vx < 40.0);
            assert!(b.vy >= -20.0 && b.vy < 20.0);
            assert_eq!(b.x.fract(), 0.0);
            assert_eq!(b.vx.fract(), 0.0);
            let code = b.glyph() as u32;
            assert!((33..126).contains(&code), "glyph {code}");
        }
    }

    #[test]
    fn spawn_in_degenerate_viewport() {
        let mut rng = SpawnRng::seeded(1);
        let b = Ball::new(Bounds::new(0, 0), physics(), &mut rng);
        assert_eq!((b.x, b.y), (0.0, 0.0));

        let b = Ball::new(Bounds::new(1, 1), physics(), &mut rng);
        assert_eq!((b.x, b.y), (0.0, 0.0));
    }

    #[test]
    fn reflects_off_right_wall_then_falls() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (10.0, 2.0), (5.0, 0.0), 'o');
        b.update();

        assert_eq!(b.vx, -5.0);
        assert_eq!(b.vy, -4.0);
        assert_eq!(b.x, 9.84375);
        assert_eq!(b.y, 1.875);
        assert_eq!((b.position_x(), b.position_y()), (10, 2));
    }

    #[test]
    fn reflects_off_left_wall() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (0.0, 3.0), (-8.0, 0.0), 'o');
        b.update();
        assert_eq!(b.vx, 8.0);
        assert_eq!(b.x, 0.25);
    }

    #[test]
    fn interior_step_applies_gravity_only() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (5.0, 3.0), (1.0, 2.0), 'o');
        b.update();
        assert_eq!(b.vx, 1.0);
        assert_eq!(b.vy, 2.0 - 4.0);
    }

    #[test]
    fn floor_bounce_and_rolling_resistance() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (5.0, 0.0), (3.0, -6.0), 'o');
        b.update();
        // Reflected to +6, then gravity; resistance 2/32 slows vx.
        assert_eq!(b.vy, 6.0 - 4.0);
        assert_eq!(b.vx, 3.0 - 0.0625);
    }

    #[test]
    fn rolling_resistance_can_overshoot_zero() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (5.0, 0.4), (0.03, 0.0), 'o');
        b.update();
        assert!(b.vx < 0.0, "vx = {}", b.vx);
    }

    #[test]
    fn rolling_resistance_small_negative_vx_is_pulled_back() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (5.0, 0.4), (-0.03, 0.0), 'o');
        b.update();
        // +1/16 lifts vx above zero, then the positive branch takes 1/16 off again.
        assert_eq!(b.vx, (-0.03f32 + 0.0625) - 0.0625);
        assert!(b.vx < 0.0, "vx = {}", b.vx);
    }

    #[test]
    fn physics_is_carried_by_each_ball() {
        let custom = Physics::from_frame_rate(64);
        let b = Ball::with_state(Bounds::new(10, 5), custom, (5.0, 3.0), (0.0, 0.0), 'o');
        assert_eq!(b.physics(), &custom);
        assert_eq!(b.physics().dt, 0.015625);
    }

    #[test]
    fn ceiling_reflection() {
        let mut b = Ball::with_state(Bounds::new(10, 5), physics(), (5.0, 5.0), (0.0, 10.0), 'o');
        b.update();
        assert_eq!(b.vy, -10.0 - 4.0);
        assert!(b.y < 5.0);
    }

    #[test]
    fn with_state_clamps_position() {
        let b = Ball::with_state(Bounds::new(10, 5), physics(), (-3.0, 99.0), (0.0, 0.0), 'o');
        assert_eq!((b.x, b.y), (0.0, 5.0));
    }

    #[test]
    fn rounding_mode_is_honored() {
        let even = physics().with_rounding(Rounding::HalfEven);
        let b = Ball::with_state(Bounds::new(10, 5), even, (2.5, 0.5), (0.0, 0.0), 'o');
        assert_eq!((b.position_x(), b.position_y()), (2, 0));

        let away = Ball::with_state(Bounds::new(10, 5), physics(), (2.5, 0.5), (0.0, 0.0), 'o');
        assert_eq!((away.position_x(), away.position_y()), (3, 1));
    }

    #[test]
    fn stays_in_bounds_over_many_steps() {
        let mut rng = SpawnRng::seeded(99);
        let bounds = Bounds::new(40, 12);
        for _ in 0..20 {
            let mut b = Ball::new(bounds, physics(), &mut rng);
            for _ in 0..2000 {
                b.update();
                assert!((0.0..=40.0).contains(&b.x));
                assert!((0.0..=12.0).contains(&b.y));
            }
        }
    }
}
