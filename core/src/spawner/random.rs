use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Chance of a new tile being a 4 instead of a 2.
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Standard spawn policy: a uniformly random empty cell receives a 2 (90%) or a 4 (10%).
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    seed: u64,
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSpawner for RandomTileSpawner {
    fn spawn(&mut self, empty_cells: &[Coord2]) -> Spawn {
        let coords = empty_cells[self.rng.random_range(0..empty_cells.len())];
        let exponent = if self.rng.random_bool(SPAWN_FOUR_PROBABILITY) {
            2
        } else {
            1
        };
        Spawn { coords, exponent }
    }
}
