use std::cell::{Cell, RefCell};
use twenty48_core::{PlayEngine, Snapshot};
use wasm_bindgen::prelude::*;

use crate::utils::js_random_seed;

thread_local! {
    static SEED: Cell<Option<u64>> = const { Cell::new(None) };
    static SESSION: RefCell<Option<Game>> = const { RefCell::new(None) };
}

/// Sets the seed used when the shared session is first created.
pub(crate) fn configure(seed: Option<u64>) {
    SEED.set(seed);
}

/// A game session owned by the host.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Game {
    engine: PlayEngine,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Game {
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("session seed: {}", seed);
        Game {
            engine: PlayEngine::with_seed(seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 {
        self.engine.spawner().seed()
    }

    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) -> String {
        encode(&self.engine.new_game())
    }

    #[wasm_bindgen(js_name = "move")]
    pub fn move_tiles(&mut self, direction: &str) -> String {
        encode(&self.engine.move_named(direction))
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> String {
        encode(&self.engine.snapshot())
    }
}

/// Starts a new game in the shared session and returns its JSON snapshot.
#[wasm_bindgen(js_name = newGame)]
pub fn new_game() -> String {
    with_session(Game::new_game)
}

/// Applies `"up"`, `"down"`, `"left"` or `"right"` to the shared session, anything else leaves it as is.
#[wasm_bindgen(js_name = "move")]
pub fn move_tiles(direction: &str) -> String {
    with_session(|game| game.move_tiles(direction))
}

#[wasm_bindgen(js_name = getState)]
pub fn get_state() -> String {
    with_session(|game| game.state())
}

fn with_session<R>(f: impl FnOnce(&mut Game) -> R) -> R {
    SESSION.with_borrow_mut(|session| f(session.get_or_insert_with(|| Game::new(SEED.get()))))
}

fn encode(snapshot: &Snapshot) -> String {
    serde_json::to_string(snapshot).unwrap_or_else(|err| {
        log::error!("Error encoding snapshot: {}", err);
        "{}".to_string()
    })
}
