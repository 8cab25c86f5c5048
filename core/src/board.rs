use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::{Array2, ArrayViewMut1, Axis};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

const LINE_LEN: usize = BOARD_SIZE as usize;

/// Tiles of one line, packed toward its front.
pub(crate) type LineTiles = SmallVec<[Exponent; LINE_LEN]>;

/// Empty positions, row-major.
pub type EmptyCells = SmallVec<[Coord2; CELL_COUNT]>;

/// Result of sliding a board without spawning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shift {
    pub board: Board,
    pub gained: Score,
}

/// The 4×4 grid, indexed `(row, col)`.
///
/// Serialized as the 16 row-major raw values, deserialized through [`Board::from_tiles`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((LINE_LEN, LINE_LEN)),
        }
    }

    /// Builds a board from row-major raw values, `0` meaning empty.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self> {
        if tiles.len() != CELL_COUNT {
            return Err(GameError::InvalidTileCount {
                expected: CELL_COUNT,
                actual: tiles.len(),
            });
        }
        if let Some(&raw) = tiles.iter().find(|&&raw| raw > MAX_EXPONENT) {
            return Err(GameError::InvalidExponent(raw));
        }

        Ok(Self {
            cells: Array2::from_shape_fn((LINE_LEN, LINE_LEN), |(row, col)| {
                Cell::from_raw(tiles[row * LINE_LEN + col])
            }),
        })
    }

    /// Row-major raw values, `0` meaning empty.
    pub fn to_tiles(&self) -> [u8; CELL_COUNT] {
        let mut tiles = [0; CELL_COUNT];
        for (slot, cell) in tiles.iter_mut().zip(self.cells.iter()) {
            *slot = cell.to_raw();
        }
        tiles
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < BOARD_SIZE && coords.1 < BOARD_SIZE {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn max_exponent(&self) -> Option<Exponent> {
        self.cells.iter().filter_map(|cell| cell.exponent()).max()
    }

    /// Sum of displayed values of all tiles.
    pub fn tile_sum(&self) -> Score {
        self.cells
            .iter()
            .map(|cell| cell.value())
            .fold(0, Score::saturating_add)
    }

    /// Slides and merges every line toward `direction`. Never spawns.
    pub fn shifted(&self, direction: Direction) -> Shift {
        let mut board = self.clone();
        let gained = board.shift_in_place(direction);
        Shift { board, gained }
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.shifted(direction).board != *self
    }

    /// True when no direction changes the board.
    pub fn is_stuck(&self) -> bool {
        Direction::ALL
            .into_iter()
            .all(|direction| !self.can_move(direction))
    }

    /// True when some orthogonal neighbours hold equal tiles.
    pub fn has_adjacent_pair(&self) -> bool {
        let rows = self.cells.rows().into_iter().any(|row| has_equal_neighbors(row.iter()));
        let cols = self.cells.columns().into_iter().any(|col| has_equal_neighbors(col.iter()));
        rows || cols
    }

    /// Places one tile chosen by `spawner`. Returns `None` on a full board.
    pub fn spawn_tile<S: TileSpawner + ?Sized>(&mut self, spawner: &mut S) -> Option<Spawn> {
        let empty_cells = self.empty_cells();
        if empty_cells.is_empty() {
            log::warn!("Board already full, no tile spawned");
            return None;
        }

        let mut spawn = spawner.spawn(&empty_cells);
        if !matches!(self.cells.get(spawn.coords.to_nd_index()), Some(Cell::Empty)) {
            log::warn!(
                "Spawner picked unavailable cell {:?}, using {:?}",
                spawn.coords,
                empty_cells[0]
            );
            spawn.coords = empty_cells[0];
        }
        spawn.exponent = spawn.exponent.clamp(1, MAX_EXPONENT);

        self.cells[spawn.coords.to_nd_index()] = Cell::Tile(spawn.exponent);
        log::trace!("spawned exponent {} at {:?}", spawn.exponent, spawn.coords);
        Some(spawn)
    }

    /// Views the grid so every move becomes "toward the front of each row", then slides each row.
    fn shift_in_place(&mut self, direction: Direction) -> Score {
        let mut view = self.cells.view_mut();
        if direction.is_vertical() {
            view = view.reversed_axes();
        }
        if direction.is_reversed() {
            view.invert_axis(Axis(1));
        }

        view.rows_mut()
            .into_iter()
            .map(slide_line)
            .fold(0, Score::saturating_add)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = GameError;

    fn try_from(tiles: Vec<u8>) -> Result<Self> {
        Self::from_tiles(&tiles)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.to_tiles().to_vec()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{:>5}", ".")?,
                    tile => write!(f, "{:>5}", tile.value())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn has_equal_neighbors<'a>(line: impl Iterator<Item = &'a Cell> + Clone) -> bool {
    line.clone()
        .zip(line.skip(1))
        .any(|(a, b)| !a.is_empty() && a == b)
}

/// Compacts a line toward index 0, merges once from the front and writes it back.
fn slide_line(mut line: ArrayViewMut1<'_, Cell>) -> Score {
    let (merged, gained) = merge_tiles(line.iter().filter_map(|cell| cell.exponent()));
    for (slot, cell) in line.iter_mut().enumerate() {
        *cell = merged.get(slot).map_or(Cell::Empty, |&exponent| Cell::Tile(exponent));
    }
    gained
}

/// Single pass over packed tiles: a merged tile never merges again in the same move.
pub(crate) fn merge_tiles(tiles: impl IntoIterator<Item = Exponent>) -> (LineTiles, Score) {
    let mut merged = LineTiles::new();
    let mut gained: Score = 0;
    let mut tiles = tiles.into_iter().peekable();

    while let Some(exponent) = tiles.next() {
        if tiles.next_if_eq(&exponent).is_some() {
            let promoted = exponent.saturating_add(1);
            gained = gained.saturating_add(tile_value(promoted));
            merged.push(promoted);
        } else {
            merged.push(exponent);
        }
    }

    (merged, gained)
}
