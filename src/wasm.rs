//! WASM bindings for tictactoe-core
//!
//! Provides a JavaScript-friendly API for the game logic. Mutators return
//! `false` and leave the game unchanged when the action is not allowed, so
//! the UI can ignore bad clicks.

use wasm_bindgen::prelude::*;

use crate::{Game, GameConfig, Pos, Status};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
    log::info!("tictactoe-core {} loaded", env!("CARGO_PKG_VERSION"));
}

/// Raise console logging to debug level (state transitions).
#[wasm_bindgen(js_name = setVerbose)]
pub fn set_verbose(verbose: bool) {
    log::set_max_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game on a size×size board with the scan rule
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmGame, JsValue> {
        let inner = Game::new(GameConfig::with_size(size)).map_err(to_js)?;
        Ok(WasmGame { inner })
    }

    /// Create a game from a config object `{ size?: number, rule?: "classic" | "scan" }`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: GameConfig = serde_wasm_bindgen::from_value(config).map_err(to_js)?;
        let inner = Game::new(config).map_err(to_js)?;
        Ok(WasmGame { inner })
    }

    /// Board side length
    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    /// Play the current mark at a cell index. Returns true if the move was made.
    pub fn place(&mut self, pos: u16) -> bool {
        self.inner.place(Pos(pos)).is_ok()
    }

    /// Play the current mark at (row, col), 0-based
    #[wasm_bindgen(js_name = placeAt)]
    pub fn place_at(&mut self, row: u8, col: u8) -> bool {
        self.inner.place_at(row, col).is_ok()
    }

    /// Show the board at a history step. Returns false if the step does not exist.
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, step: usize) -> bool {
        self.inner.jump_to(step).is_ok()
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo().is_ok()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo().is_ok()
    }

    /// Flip the move list order. Returns true when now ascending.
    #[wasm_bindgen(js_name = toggleSort)]
    pub fn toggle_sort(&mut self) -> bool {
        self.inner.toggle_sort() == crate::SortOrder::Ascending
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Status line: "Next player: X", "Winner: O" or "Draw"
    pub fn status(&self) -> String {
        crate::view::status_line(&self.inner.status())
    }

    /// Game result: "ongoing", "x_wins", "o_wins" or "draw"
    pub fn result(&self) -> String {
        match self.inner.status() {
            Status::InProgress { .. } => "ongoing".to_string(),
            Status::Won(win) => format!("{}_wins", win.mark.to_string().to_lowercase()),
            Status::Drawn => "draw".to_string(),
        }
    }

    /// Check if game is over at the current step
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.status().is_over()
    }

    /// Full render model as a JS object (board cells, status, move list, sort label)
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.view()).map_err(to_js)
    }

    /// Cells of the current snapshot: 0 (empty), 1 (X), 2 (O)
    pub fn squares(&self) -> Vec<u8> {
        self.inner.current().to_bits()
    }

    /// Winning line cell indices, empty if no winner at the current step
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u16> {
        self.inner
            .winner()
            .map(|win| win.line.iter().map(|pos| pos.0).collect())
            .unwrap_or_default()
    }

    /// Mark to move: 1 (X) or 2 (O)
    #[wasm_bindgen(js_name = nextMark)]
    pub fn next_mark(&self) -> u8 {
        self.inner.next_mark() as u8
    }

    #[wasm_bindgen(js_name = stepNumber)]
    pub fn step_number(&self) -> usize {
        self.inner.step()
    }

    #[wasm_bindgen(js_name = historyLen)]
    pub fn history_len(&self) -> usize {
        self.inner.history().len()
    }

    #[wasm_bindgen(js_name = exportNotation)]
    pub fn export_notation(&self) -> String {
        self.inner.export_notation()
    }

    /// Replace the game with a replayed notation string. Returns false on bad input.
    #[wasm_bindgen(js_name = importNotation)]
    pub fn import_notation(&mut self, notation: &str) -> bool {
        match self.inner.import_notation(notation) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("import failed: {}", err);
                false
            }
        }
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame {
            inner: self.inner.clone(),
        }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        WasmGame {
            inner: Game::default(),
        }
    }
}
