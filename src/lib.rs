//! Tic-tac-toe game logic with move history, time travel and N×N win detection.
//!
//! # Board Layout
//!
//! ```text
//! Cells are stored row-major: index = row * size + col
//!
//! 3x3:
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//!
//! Cell encoding (wasm boundary and `Board::to_bits`):
//!   0 = empty, 1 = X, 2 = O
//! ```
//!
//! # Win Rules
//!
//! ```text
//! Classic: fixed 3x3 table of 8 lines, independent of the last move
//! Scan:    run through the last move along |, -, \, /
//!          run length = min(size - 1, 4) + 1   (5-in-a-row from 5x5 up)
//! ```
//!
//! The [`Game`] owns every snapshot ever committed plus the log of where
//! each move was played, so any earlier step can be revisited and played
//! over from.

pub mod config;
pub mod detect;
pub mod error;
pub mod game;
pub mod notation;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use config::{GameConfig, MAX_SIZE, MIN_SIZE};
pub use detect::{detect, Win, WinRule};
pub use error::{Error, Result};
pub use game::{Game, SortOrder, Status};
pub use view::{BoardView, CellView, GameView, MoveEntry};

/// Player mark.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mark {
    X = 1,
    O = 2,
}

impl Mark {
    /// Get the other mark.
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert from u8 (1 or 2) to Mark.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Mark> {
        match bits {
            1 => Some(Mark::X),
            2 => Some(Mark::O),
            _ => None,
        }
    }

    /// Mark to move at a given history step. X always opens.
    #[inline]
    pub fn for_step(step: usize) -> Mark {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Cell index on a `size`×`size` board, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pos(pub u16);

impl Pos {
    /// Create a position from row and column on a board of the given size.
    #[inline]
    pub fn from_row_col(row: u8, col: u8, size: u8) -> Pos {
        debug_assert!(row < size && col < size);
        Pos(row as u16 * size as u16 + col as u16)
    }

    /// Row (0-based).
    #[inline]
    pub fn row(self, size: u8) -> u8 {
        (self.0 / size as u16) as u8
    }

    /// Column (0-based).
    #[inline]
    pub fn col(self, size: u8) -> u8 {
        (self.0 % size as u16) as u8
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this position lies on a board of the given size.
    #[inline]
    pub fn is_valid(self, size: u8) -> bool {
        (self.0 as usize) < size as usize * size as usize
    }

    /// Iterate over all positions of a board of the given size.
    pub fn all(size: u8) -> impl Iterator<Item = Pos> {
        (0..size as u16 * size as u16).map(Pos)
    }
}

/// One board snapshot.
///
/// Snapshots are never edited once they are in a game's history;
/// [`Board::with_mark`] returns the next snapshot instead.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: u8) -> Board {
        Board {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Build a board from raw cells. Fails unless there are exactly `size²` of them.
    pub fn from_cells(size: u8, cells: Vec<Option<Mark>>) -> Result<Board> {
        let expected = size as usize * size as usize;
        if cells.len() != expected {
            return Err(Error::CellCount {
                expected,
                got: cells.len(),
            });
        }
        Ok(Board { size, cells })
    }

    /// Parse a board from a row-major string of `X`, `O` and `.`/`_`/`-`
    /// for empty cells. Whitespace and `/` row separators are ignored.
    pub fn parse(size: u8, s: &str) -> Result<Board> {
        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for (i, ch) in s.chars().filter(|c| !c.is_whitespace() && *c != '/').enumerate() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                other => {
                    return Err(Error::InvalidCell {
                        character: other,
                        index: i,
                    })
                }
            };
            cells.push(cell);
        }
        Board::from_cells(size, cells)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of cells (`size²`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell holds a mark.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Mark at a position, `None` if empty or off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        self.cells.get(pos.index()).copied().flatten()
    }

    /// Check if the cell at `pos` exists and is empty.
    #[inline]
    pub fn is_free(&self, pos: Pos) -> bool {
        matches!(self.cells.get(pos.index()), Some(None))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Next snapshot with `mark` placed at `pos`.
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Result<Board> {
        match self.cells.get(pos.index()) {
            None => Err(Error::OutOfBounds {
                pos: pos.0,
                size: self.size,
            }),
            Some(Some(_)) => Err(Error::CellOccupied { pos: pos.0 }),
            Some(None) => {
                let mut next = self.clone();
                next.cells[pos.index()] = Some(mark);
                Ok(next)
            }
        }
    }

    /// Cells encoded as 0 (empty), 1 (X), 2 (O).
    pub fn to_bits(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|c| c.map_or(0, |m| m as u8))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1) as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{}, \"", self.size, self.size)?;
        for (i, row) in self.cells.chunks(self.size.max(1) as usize).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => f.write_str(".")?,
                }
            }
        }
        f.write_str("\")")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}
