use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown direction, expected one of up, down, left or right")]
    InvalidDirection,
    #[error("Board needs {expected} tiles, got {actual}")]
    InvalidTileCount { expected: usize, actual: usize },
    #[error("Tile exponent {0} is out of range")]
    InvalidExponent(u8),
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
