use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Tile exponent, a tile with exponent `e` shows `2^e`.
pub type Exponent = u8;

/// Score and displayed tile values.
pub type Score = u64;

/// Single coordinate axis, rows and columns alike.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Side length of the square board.
pub const BOARD_SIZE: Coord = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Largest exponent accepted from the outside, `2^63` still fits a [`Score`].
pub const MAX_EXPONENT: Exponent = 63;

/// Value shown for a tile of the given exponent, saturating past `Score::MAX`.
pub const fn tile_value(exponent: Exponent) -> Score {
    match (1 as Score).checked_shl(exponent as u32) {
        Some(value) => value,
        None => Score::MAX,
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Converts a row-major index into `(row, col)`.
pub const fn coords_of(index: usize) -> Coord2 {
    let size = BOARD_SIZE as usize;
    ((index / size) as Coord, (index % size) as Coord)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn as_str(self) -> &'static str {
        use Direction::*;
        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }

    /// Whether the move runs along columns rather than rows.
    pub(crate) const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether the target edge is the far end of the row or column.
    pub(crate) const fn is_reversed(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self> {
        use Direction::*;
        match name {
            "up" => Ok(Up),
            "down" => Ok(Down),
            "left" => Ok(Left),
            "right" => Ok(Right),
            _ => Err(GameError::InvalidDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
