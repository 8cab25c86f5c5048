use serde::{Deserialize, Serialize};

use crate::*;

/// State handed to the host after every call.
///
/// Field names on the wire are `Score`, `Tiles` and `GameOver`. `Tiles` is row-major with `0` for empty cells and
/// the exponent otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Score")]
    pub score: Score,
    #[serde(rename = "Tiles")]
    pub tiles: [u8; CELL_COUNT],
    #[serde(rename = "GameOver")]
    pub game_over: bool,
}

impl Snapshot {
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|&&raw| raw != 0).count()
    }
}
