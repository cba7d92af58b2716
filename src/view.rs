//! What the frontend draws, as plain data.
//!
//! Everything here is derived from a [`Game`] on demand; nothing is stored.

use serde::Serialize;

use crate::{Board, Game, Mark, Pos, SortOrder, Status, Win};

/// One cell of the rendered board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub pos: Pos,
    pub mark: Option<Mark>,
    /// Part of the winning line at the current step
    pub highlighted: bool,
}

/// The board at the current step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub size: u8,
    pub cells: Vec<CellView>,
}

impl BoardView {
    pub fn new(board: &Board, win: Option<&Win>) -> BoardView {
        let cells = board
            .cells()
            .iter()
            .enumerate()
            .map(|(i, &mark)| {
                let pos = Pos(i as u16);
                CellView {
                    pos,
                    mark,
                    highlighted: win.is_some_and(|w| w.contains(pos)),
                }
            })
            .collect();
        BoardView {
            size: board.size(),
            cells,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.size.max(1) as usize)
    }
}

/// One clickable entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub description: String,
    pub emphasized: bool,
}

/// Everything needed to render one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: BoardView,
    pub status: String,
    pub moves: Vec<MoveEntry>,
    pub sort: &'static str,
    pub step: usize,
    pub over: bool,
}

/// "Next player: X", "Winner: X" or "Draw".
pub fn status_line(status: &Status) -> String {
    match status {
        Status::InProgress { next } => format!("Next player: {}", next),
        Status::Won(win) => format!("Winner: {}", win.mark),
        Status::Drawn => "Draw".to_string(),
    }
}

/// Text for the history entry at `step`; `pos` is the move that reached it.
/// Coordinates are 1-based (col, row).
pub fn describe_move(step: usize, pos: Option<Pos>, size: u8) -> String {
    match pos {
        Some(pos) if step > 0 => format!(
            "Go to move #{}: ({}, {})",
            step,
            pos.col(size) + 1,
            pos.row(size) + 1
        ),
        _ => "Go to game start".to_string(),
    }
}

/// Move list for a position log, in display order.
pub fn move_list(
    positions: &[Pos],
    size: u8,
    selected: Option<usize>,
    order: SortOrder,
) -> Vec<MoveEntry> {
    let mut moves: Vec<MoveEntry> = (0..=positions.len())
        .map(|step| {
            let pos = step.checked_sub(1).map(|i| positions[i]);
            MoveEntry {
                step,
                description: describe_move(step, pos, size),
                emphasized: selected == Some(step),
            }
        })
        .collect();
    if order == SortOrder::Descending {
        moves.reverse();
    }
    moves
}

impl Game {
    /// Render-ready snapshot of the current step.
    pub fn view(&self) -> GameView {
        let status = self.status();
        GameView {
            board: BoardView::new(self.current(), status.win()),
            status: status_line(&status),
            moves: move_list(self.positions(), self.size(), self.selected(), self.order()),
            sort: self.order().label(),
            step: self.step(),
            over: status.is_over(),
        }
    }
}
