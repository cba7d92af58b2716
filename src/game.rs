//! Game state: history of snapshots, the move log, and time travel.
//!
//! `history[0]` is the empty board and `positions[i]` is the cell played to
//! reach `history[i + 1]`. The current step points into history; playing a
//! move from an earlier step discards everything after it first.

use serde::Serialize;

use crate::{Board, Error, GameConfig, Mark, Pos, Result, Win, WinRule};

/// Display order of the move list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label shown on the sort toggle.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Outcome of the board at one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    InProgress { next: Mark },
    Won(Win),
    Drawn,
}

impl Status {
    /// Evaluate a snapshot. `last` is the move that produced it, if any.
    pub fn evaluate(rule: WinRule, board: &Board, last: Option<Pos>) -> Status {
        if let Some(win) = rule.detect(board, last) {
            Status::Won(win)
        } else if board.is_full() {
            Status::Drawn
        } else {
            Status::InProgress {
                next: Mark::for_step(board.filled()),
            }
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }

    pub fn win(&self) -> Option<&Win> {
        match self {
            Status::Won(win) => Some(win),
            _ => None,
        }
    }
}

/// One game with full history.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    /// Snapshots (index 0 = empty board)
    history: Vec<Board>,
    /// positions[i] = cell played to reach history[i + 1]
    positions: Vec<Pos>,
    /// Current position in history
    step: usize,
    /// Step last chosen with `jump_to`, cleared by `place`
    selected: Option<usize>,
    order: SortOrder,
}

impl Game {
    /// Start a game. Fails if the config does not validate.
    pub fn new(config: GameConfig) -> Result<Game> {
        config.validate()?;
        Ok(Game::fresh(config))
    }

    fn fresh(config: GameConfig) -> Game {
        Game {
            config,
            history: vec![Board::new(config.size)],
            positions: Vec::new(),
            step: 0,
            selected: None,
            order: SortOrder::Ascending,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> u8 {
        self.config.size
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Every snapshot, including those after the current step.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Where each move in history was played.
    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The move that produced the current snapshot.
    pub fn last_move(&self) -> Option<Pos> {
        self.step.checked_sub(1).map(|i| self.positions[i])
    }

    /// Mark to play at the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Outcome at the current step. Recomputed on every call.
    pub fn status(&self) -> Status {
        Status::evaluate(self.config.rule, self.current(), self.last_move())
    }

    pub fn winner(&self) -> Option<Win> {
        match self.status() {
            Status::Won(win) => Some(win),
            _ => None,
        }
    }

    /// Play the current mark at `pos`.
    ///
    /// Any snapshots after the current step are discarded first. Nothing
    /// changes if the game is over or the cell is taken.
    pub fn place(&mut self, pos: Pos) -> Result<Status> {
        if self.status().is_over() {
            return Err(Error::GameOver);
        }
        let mark = self.next_mark();
        let board = self.current().with_mark(pos, mark)?;

        // Truncate future history if we've time traveled
        self.history.truncate(self.step + 1);
        self.positions.truncate(self.step);

        self.history.push(board);
        self.positions.push(pos);
        self.step += 1;
        self.selected = None;

        let status = self.status();
        log::debug!("step {}: {} at {:?} -> {:?}", self.step, mark, pos, status);
        Ok(status)
    }

    /// Play at (row, col), both 0-based.
    pub fn place_at(&mut self, row: u8, col: u8) -> Result<Status> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(Error::OutOfBounds {
                pos: row as u16 * size as u16 + col as u16,
                size,
            });
        }
        self.place(Pos::from_row_col(row, col, size))
    }

    /// Move the current step to `step`. History is kept intact.
    pub fn jump_to(&mut self, step: usize) -> Result<Status> {
        if step >= self.history.len() {
            return Err(Error::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        self.selected = Some(step);
        let status = self.status();
        log::debug!("jump to step {} -> {:?}", step, status);
        Ok(status)
    }

    /// Flip the move-list order. Game state is untouched.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.order = self.order.toggled();
        self.order
    }

    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        self.step < self.history.len() - 1
    }

    /// Step back one move.
    pub fn undo(&mut self) -> Result<Status> {
        if !self.can_undo() {
            return Err(Error::NothingToUndo);
        }
        self.jump_to(self.step - 1)
    }

    /// Step forward one move along the kept history.
    pub fn redo(&mut self) -> Result<Status> {
        if !self.can_redo() {
            return Err(Error::NothingToRedo);
        }
        self.jump_to(self.step + 1)
    }

    /// Back to an empty board with the same config.
    pub fn reset(&mut self) {
        *self = Game::fresh(self.config);
        log::debug!("reset {}x{} game", self.config.size, self.config.size);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::fresh(GameConfig::default())
    }
}
