//! RNG module - seeded randomness for pin falls and collision kicks
//!
//! All randomness in the games flows through [`GameRng`], a thin wrapper over a
//! PCG32 generator. The same seed always produces the same game, which keeps the
//! physics and the text game reproducible in tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pins knocked down by a random delivery, uniform in `0..=standing`
    pub fn pins(&mut self, standing: u8) -> u8 {
        self.inner.random_range(0..=standing)
    }

    /// Uniform value in `[min, max)`; `min` when the range is empty
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.inner.random_range(min..max)
        } else {
            min
        }
    }

    /// Random direction in `[0, 2π)` scaled by a magnitude in `[min, max)`
    pub fn impulse(&mut self, min: f32, max: f32) -> Vec2 {
        let angle = self.range(0.0, std::f32::consts::TAU);
        let magnitude = self.range(min, max);
        Vec2::from_angle(angle) * magnitude
    }

    /// Derive a fresh seed (used when a game restarts)
    pub fn next_seed(&mut self) -> u64 {
        self.inner.random()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}
