use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Tiles placed by a new game.
pub const INITIAL_TILES: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Over,
}

impl EngineState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved { gained: Score },
    GameOver { gained: Score },
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved { .. } => true,
            GameOver { .. } => true,
        }
    }

    /// Points added by merges during the move.
    pub const fn gained(self) -> Score {
        use MoveOutcome::*;
        match self {
            NoChange => 0,
            Moved { gained } | GameOver { gained } => gained,
        }
    }
}

/// One game session: board, score, terminal flag and the tile source.
#[derive(Clone, Debug)]
pub struct PlayEngine<S = RandomTileSpawner> {
    board: Board,
    score: Saturating<Score>,
    state: EngineState,
    spawner: S,
}

impl PlayEngine<RandomTileSpawner> {
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomTileSpawner::new(seed))
    }
}

impl<S: TileSpawner> PlayEngine<S> {
    /// Starts a fresh game.
    pub fn new(spawner: S) -> Self {
        let mut engine = Self {
            board: Board::empty(),
            score: Saturating(0),
            state: EngineState::default(),
            spawner,
        };
        engine.reset();
        engine
    }

    /// Resumes from an arbitrary board, the terminal flag is derived from it.
    pub fn from_board(board: Board, score: Score, spawner: S) -> Self {
        let state = if board.is_stuck() {
            EngineState::Over
        } else {
            EngineState::Playing
        };
        Self {
            board,
            score: Saturating(score),
            state,
            spawner,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score.0,
            tiles: self.board.to_tiles(),
            game_over: self.state.is_over(),
        }
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        !self.state.is_over() && self.board.can_move(direction)
    }

    /// Playable directions in [`Direction::ALL`] order.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|direction| self.can_move(direction))
    }

    pub fn new_game(&mut self) -> Snapshot {
        self.reset();
        log::debug!("new game: {:?}", self.board.to_tiles());
        self.snapshot()
    }

    pub fn make_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.is_over() {
            log::trace!("move {} ignored, game is over", direction);
            return MoveOutcome::NoChange;
        }

        let Shift { board, gained } = self.board.shifted(direction);
        if board == self.board {
            log::trace!("move {} changes nothing", direction);
            return MoveOutcome::NoChange;
        }

        self.board = board;
        self.score += gained;
        self.board.spawn_tile(&mut self.spawner);

        // full four-direction check, not just "board is full"
        if self.board.is_stuck() {
            self.state = EngineState::Over;
            log::debug!(
                "move {} ends the game with score {}",
                direction,
                self.score.0
            );
            MoveOutcome::GameOver { gained }
        } else {
            log::debug!(
                "move {} gained {}, score {}",
                direction,
                gained,
                self.score.0
            );
            MoveOutcome::Moved { gained }
        }
    }

    /// String boundary used by hosts: unknown names leave the game untouched.
    pub fn move_named(&mut self, name: &str) -> Snapshot {
        match name.parse::<Direction>() {
            Ok(direction) => {
                self.make_move(direction);
            }
            Err(err) => log::debug!("ignoring move {:?}: {}", name, err),
        }
        self.snapshot()
    }

    fn reset(&mut self) {
        self.board = Board::empty();
        self.score = Saturating(0);
        self.state = EngineState::Playing;
        for _ in 0..INITIAL_TILES {
            self.board.spawn_tile(&mut self.spawner);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(spawns: &[(Coord2, Exponent)]) -> SequenceSpawner {
        SequenceSpawner::new(
            spawns
                .iter()
                .map(|&(coords, exponent)| Spawn { coords, exponent }),
        )
    }

    fn board(tiles: [u8; CELL_COUNT]) -> Board {
        Board::from_tiles(&tiles).unwrap()
    }

    #[test]
    fn new_game_has_two_small_tiles_and_zero_score() {
        for seed in 0..64 {
            let engine = PlayEngine::with_seed(seed);
            let snapshot = engine.snapshot();

            assert_eq!(snapshot.score, 0);
            assert!(!snapshot.game_over);
            assert_eq!(snapshot.tile_count(), 2);
            assert!(
                snapshot
                    .tiles
                    .iter()
                    .all(|&raw| matches!(raw, 0 | 1 | 2))
            );
        }
    }

    #[test]
    fn new_game_resets_a_finished_session() {
        #[rustfmt::skip]
        let stuck = board([
            1, 2, 1, 2,
            2, 1, 2, 1,
            1, 2, 1, 2,
            2, 1, 2, 1,
        ]);
        let mut engine = PlayEngine::from_board(stuck, 500, RandomTileSpawner::new(3));
        assert!(engine.is_over());

        let snapshot = engine.new_game();

        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.tile_count(), 2);
    }

    #[test]
    fn right_move_from_corner_tiles_spawns_a_third() {
        let mut engine = PlayEngine::new(scripted(&[((0, 0), 1), ((3, 3), 1), ((1, 1), 1)]));
        assert_eq!(engine.board().cell_at((0, 0)), Cell::Tile(1));
        assert_eq!(engine.board().cell_at((3, 3)), Cell::Tile(1));

        let snapshot = engine.move_named("right");

        assert_eq!(snapshot.tiles[3], 1);
        assert_eq!(snapshot.tiles[15], 1);
        assert_eq!(snapshot.tiles[5], 1);
        assert_eq!(snapshot.tile_count(), 3);
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn merge_adds_merged_value_to_score() {
        let mut tiles = [0; CELL_COUNT];
        tiles[2] = 2;
        tiles[3] = 2;
        let mut engine = PlayEngine::from_board(board(tiles), 0, scripted(&[((3, 3), 1)]));

        assert_eq!(
            engine.make_move(Direction::Left),
            MoveOutcome::Moved { gained: 8 }
        );

        assert_eq!(engine.board().cell_at((0, 0)), Cell::Tile(3));
        assert_eq!(engine.score(), 8);
        assert_eq!(engine.board().cell_at((3, 3)), Cell::Tile(1));
    }

    #[test]
    fn no_op_move_keeps_state_and_does_not_spawn() {
        let mut tiles = [0; CELL_COUNT];
        tiles[..4].copy_from_slice(&[1, 2, 3, 4]);
        let mut engine = PlayEngine::from_board(board(tiles), 40, scripted(&[((2, 2), 1)]));
        let before = engine.snapshot();

        assert_eq!(engine.make_move(Direction::Left), MoveOutcome::NoChange);
        assert_eq!(engine.make_move(Direction::Up), MoveOutcome::NoChange);

        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.spawner().remaining(), 1);
    }

    #[test]
    fn unknown_direction_is_a_no_op() {
        let mut engine = PlayEngine::with_seed(11);
        let before = engine.snapshot();

        for name in ["", "UP", "north", "left "] {
            assert_eq!(engine.move_named(name), before);
        }
    }

    #[test]
    fn filling_the_last_cell_into_a_dead_board_ends_the_game() {
        #[rustfmt::skip]
        let almost = board([
            1, 2, 1, 2,
            2, 1, 2, 1,
            1, 2, 1, 2,
            0, 2, 1, 2,
        ]);
        let mut engine = PlayEngine::from_board(almost, 100, scripted(&[((3, 3), 1)]));
        assert!(!engine.is_over());

        assert_eq!(
            engine.make_move(Direction::Left),
            MoveOutcome::GameOver { gained: 0 }
        );

        let snapshot = engine.snapshot();
        assert!(snapshot.game_over);
        assert_eq!(snapshot.score, 100);
        assert_eq!(engine.legal_moves(), [false; 4]);
    }

    #[test]
    fn moves_after_game_over_return_identical_snapshots() {
        #[rustfmt::skip]
        let stuck = board([
            3, 1, 3, 1,
            1, 3, 1, 3,
            3, 1, 3, 1,
            1, 3, 1, 3,
        ]);
        let mut engine = PlayEngine::from_board(stuck, 77, scripted(&[]));
        let before = engine.snapshot();
        assert!(before.game_over);

        for direction in Direction::ALL {
            assert_eq!(engine.make_move(direction), MoveOutcome::NoChange);
            assert_eq!(engine.move_named(direction.as_str()), before);
        }
    }

    #[test]
    fn full_board_with_merge_keeps_playing() {
        #[rustfmt::skip]
        let full = board([
            1, 1, 2, 3,
            2, 3, 1, 2,
            1, 2, 3, 1,
            3, 1, 2, 3,
        ]);
        let mut engine = PlayEngine::from_board(full, 0, scripted(&[]));
        assert!(!engine.is_over());
        assert_eq!(engine.legal_moves(), [false, false, true, true]);

        let outcome = engine.make_move(Direction::Left);
        assert!(outcome.has_update());
        assert_eq!(outcome.gained(), 4);
        assert_eq!(engine.score(), 4);
    }
}
