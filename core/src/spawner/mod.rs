use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Where and what to place after a state-changing move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub coords: Coord2,
    pub exponent: Exponent,
}

/// Source of new tiles.
///
/// `empty_cells` is never empty and is ordered row-major. Implementations must return one of its entries.
pub trait TileSpawner {
    fn spawn(&mut self, empty_cells: &[Coord2]) -> Spawn;
}

impl<T: TileSpawner + ?Sized> TileSpawner for &mut T {
    fn spawn(&mut self, empty_cells: &[Coord2]) -> Spawn {
        (**self).spawn(empty_cells)
    }
}
