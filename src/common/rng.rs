//! Session randomness.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(Pcg32);

impl GameRng {
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Integer point drawn uniformly from the inclusive region.
    pub fn point_in(&mut self, region: IRect) -> Vec2 {
        let x = self.0.random_range(region.min.x..=region.max.x);
        let y = self.0.random_range(region.min.y..=region.max.y);
        Vec2::new(x as f32, y as f32)
    }

    /// Uniform integer in `0..=max`.
    pub fn up_to(&mut self, max: u8) -> u8 {
        self.0.random_range(0..=max)
    }
}
