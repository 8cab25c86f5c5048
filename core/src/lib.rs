//! Rules engine for the 2048 sliding-tile game.
//!
//! A [`PlayEngine`] owns one session: a 4×4 [`Board`] of tile exponents, the score and the game-over flag. Hosts
//! call [`PlayEngine::new_game`] and [`PlayEngine::make_move`] (or [`PlayEngine::move_named`] with the literal
//! direction names) and hand the resulting [`Snapshot`] to the presentation layer.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use snapshot::*;
pub use spawner::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod snapshot;
mod spawner;
mod types;
