use alloc::collections::VecDeque;

use super::*;

/// Scripted spawner for reproducible boards.
///
/// Each queued spawn is used when its cell is empty. Once the queue runs dry, or when a queued cell is taken, the
/// first empty cell gets a 2.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceSpawner {
    queue: VecDeque<Spawn>,
}

impl SequenceSpawner {
    pub fn new(spawns: impl IntoIterator<Item = Spawn>) -> Self {
        Self {
            queue: spawns.into_iter().collect(),
        }
    }

    pub fn push(&mut self, coords: Coord2, exponent: Exponent) {
        self.queue.push_back(Spawn { coords, exponent });
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl TileSpawner for SequenceSpawner {
    fn spawn(&mut self, empty_cells: &[Coord2]) -> Spawn {
        match self.queue.pop_front() {
            Some(spawn) if empty_cells.contains(&spawn.coords) => spawn,
            Some(spawn) => {
                log::warn!(
                    "Scripted spawn at {:?} is occupied, using first empty cell",
                    spawn.coords
                );
                Spawn {
                    coords: empty_cells[0],
                    exponent: spawn.exponent,
                }
            }
            None => Spawn {
                coords: empty_cells[0],
                exponent: 1,
            },
        }
    }
}
