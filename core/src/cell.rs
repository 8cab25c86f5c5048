use serde::{Deserialize, Serialize};

use crate::{Exponent, Score, tile_value};

/// Content of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Tile(Exponent),
}

impl Cell {
    /// Maps the wire representation back to a cell, `0` being empty.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Empty,
            exponent => Self::Tile(exponent),
        }
    }

    /// Wire representation: `0` for empty, the exponent otherwise.
    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Tile(exponent) => exponent,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn exponent(self) -> Option<Exponent> {
        match self {
            Self::Empty => None,
            Self::Tile(exponent) => Some(exponent),
        }
    }

    /// Displayed value, `0` for an empty cell.
    pub const fn value(self) -> Score {
        match self {
            Self::Empty => 0,
            Self::Tile(exponent) => tile_value(exponent),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
