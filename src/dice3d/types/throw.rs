//! Random initial motion for thrown dice

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Magnitude range for one axis of a spin or impulse.
///
/// Each component is drawn uniformly from `[min, max)` and given a random sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinRange {
    pub min: f32,
    pub max: f32,
}

impl SpinRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample_component<R: Rng>(&self, rng: &mut R) -> f32 {
        // gen_range panics on an empty range.
        let magnitude = if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        };
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    pub fn sample_vec3<R: Rng>(&self, rng: &mut R) -> Vec3 {
        Vec3::new(
            self.sample_component(rng),
            self.sample_component(rng),
            self.sample_component(rng),
        )
    }
}

/// Random source shared by every throw
#[derive(Resource)]
pub struct ThrowRng(pub StdRng);

impl ThrowRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for ThrowRng {
    fn default() -> Self {
        Self::new(None)
    }
}
