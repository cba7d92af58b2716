//! Win detection.
//!
//! Two rules are supported:
//!
//! - [`WinRule::Classic`] checks the fixed table of the 8 lines of a 3x3
//!   board and ignores where the last mark went.
//! - [`WinRule::Scan`] walks outward from the last move along the four
//!   axes and counts the unbroken run of the same mark. The run needed is
//!   `min(size - 1, 4) + 1`, so boards from 5x5 up play five-in-a-row.

use serde::{Deserialize, Serialize};

use crate::{Board, Mark, Pos};

/// How a winning line is recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinRule {
    /// Fixed 3x3 line table.
    Classic,
    /// Run through the last move, any board size.
    Scan,
}

/// A completed line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Win {
    pub mark: Mark,
    /// Every cell of the run, ascending.
    pub line: Vec<Pos>,
}

impl Win {
    /// Check if `pos` is part of the winning line.
    pub fn contains(&self, pos: Pos) -> bool {
        self.line.binary_search(&pos).is_ok()
    }
}

/// Winning lines of the 3x3 board: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Pos; 3]; 8] = [
    [Pos(0), Pos(1), Pos(2)], // Row 0
    [Pos(3), Pos(4), Pos(5)], // Row 1
    [Pos(6), Pos(7), Pos(8)], // Row 2
    [Pos(0), Pos(3), Pos(6)], // Col 0
    [Pos(1), Pos(4), Pos(7)], // Col 1
    [Pos(2), Pos(5), Pos(8)], // Col 2
    [Pos(0), Pos(4), Pos(8)], // Main diagonal
    [Pos(2), Pos(4), Pos(6)], // Anti-diagonal
];

/// Scan axes as (row step, col step), in priority order: |, -, \, /.
const AXES: [(i16, i16); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

impl WinRule {
    /// Marks in a row needed to win on a board of the given size.
    pub fn run_length(self, size: u8) -> usize {
        match self {
            WinRule::Classic => 3,
            WinRule::Scan => (size.saturating_sub(1) as usize).min(4) + 1,
        }
    }

    /// Look for a win on `board`. `last` is the move just played; the
    /// scan rule needs it and reports nothing without it.
    pub fn detect(self, board: &Board, last: Option<Pos>) -> Option<Win> {
        match self {
            WinRule::Classic => detect_classic(board),
            WinRule::Scan => last.and_then(|pos| detect(board, pos)),
        }
    }
}

/// Scan for a run through `last`.
///
/// Returns `None` when `last` is empty or off the board, so an empty
/// board never reports a winner. When several axes complete at once the
/// first in |, -, \, / order is reported.
pub fn detect(board: &Board, last: Pos) -> Option<Win> {
    let size = board.size();
    let mark = board.get(last)?;
    let needed = WinRule::Scan.run_length(size) - 1;
    let n = size as i16;
    let (row, col) = (last.row(size) as i16, last.col(size) as i16);

    for (dr, dc) in AXES {
        let mut line = vec![last];

        for sign in [1, -1] {
            let (mut r, mut c) = (row + dr * sign, col + dc * sign);
            while (0..n).contains(&r) && (0..n).contains(&c) {
                let pos = Pos::from_row_col(r as u8, c as u8, size);
                if board.get(pos) != Some(mark) {
                    break;
                }
                line.push(pos);
                r += dr * sign;
                c += dc * sign;
            }
        }

        if line.len() - 1 >= needed {
            line.sort_unstable();
            log::trace!("{} completes {:?} along ({}, {})", mark, line, dr, dc);
            return Some(Win { mark, line });
        }
    }

    None
}

/// First line of [`WIN_LINES`] held by one mark.
pub fn detect_classic(board: &Board) -> Option<Win> {
    if board.size() != 3 {
        return None;
    }
    for line in &WIN_LINES {
        let Some(mark) = board.get(line[0]) else {
            continue;
        };
        if line.iter().all(|&pos| board.get(pos) == Some(mark)) {
            log::trace!("{} holds {:?}", mark, line);
            return Some(Win {
                mark,
                line: line.to_vec(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: u8, s: &str) -> Board {
        Board::parse(size, s).unwrap()
    }

    // ========== Scan Rule: 3x3 ==========

    #[test]
    fn test_no_winner_empty_board() {
        let empty = Board::new(3);
        for pos in Pos::all(3) {
            assert_eq!(detect(&empty, pos), None);
        }
        assert_eq!(detect_classic(&empty), None);
    }

    #[test]
    fn test_top_row_from_corner() {
        let b = board(3, "XXX......");
        let win = detect(&b, Pos(2)).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line, vec![Pos(0), Pos(1), Pos(2)]);
    }

    #[test]
    fn test_top_row_from_middle() {
        let b = board(3, "XXX......");
        let win = detect(&b, Pos(1)).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(1), Pos(2)]);
    }

    #[test]
    fn test_vertical_win() {
        let b = board(3, "O../O../O..");
        let win = detect(&b, Pos(3)).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line, vec![Pos(0), Pos(3), Pos(6)]);
    }

    #[test]
    fn test_diagonal_win() {
        let b = board(3, "X../.X./..X");
        let win = detect(&b, Pos(8)).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(4), Pos(8)]);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board(3, "..O/.O./O..");
        let win = detect(&b, Pos(4)).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line, vec![Pos(2), Pos(4), Pos(6)]);
    }

    #[test]
    fn test_run_not_through_last_move() {
        // Row 0 is complete, but the move at 8 is not on it.
        let b = board(3, "XXX/.O./..X");
        assert_eq!(detect(&b, Pos(8)), None);
    }

    #[test]
    fn test_empty_last_cell() {
        let b = board(3, "XX.......");
        assert_eq!(detect(&b, Pos(2)), None);
        assert_eq!(detect(&b, Pos(40)), None);
    }

    #[test]
    fn test_broken_run() {
        let b = board(3, "XOX......");
        assert_eq!(detect(&b, Pos(2)), None);
    }

    #[test]
    fn test_full_board_no_line() {
        let b = board(3, "XOX/OXO/OXO");
        for pos in Pos::all(3) {
            assert_eq!(detect(&b, pos), None, "pos {:?}", pos);
        }
        assert_eq!(detect_classic(&b), None);
    }

    #[test]
    fn test_axis_priority() {
        // Move at 0 completes both column 0 and row 0; vertical is checked first.
        let b = board(3, "XXX/X../X..");
        let win = detect(&b, Pos(0)).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(3), Pos(6)]);
    }

    #[test]
    fn test_diagonal_before_anti_diagonal() {
        let b = board(3, "X.X/.X./X.X");
        let win = detect(&b, Pos(4)).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(4), Pos(8)]);
    }

    #[test]
    fn test_idempotent() {
        let b = board(3, "XOX/.X./O.X");
        let first = detect(&b, Pos(8));
        assert_eq!(first, detect(&b, Pos(8)));
        assert!(first.is_some());
    }

    // ========== Scan Rule: larger boards ==========

    #[test]
    fn test_4x4_needs_four() {
        let three = board(4, "X.../X.../X.../....");
        assert_eq!(detect(&three, Pos(8)), None);

        let four = board(4, "X.../X.../X.../X...");
        let win = detect(&four, Pos(12)).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(4), Pos(8), Pos(12)]);
    }

    #[test]
    fn test_5x5_vertical_five() {
        let four = board(5, "..X../..X../..X../..X../.....");
        assert_eq!(detect(&four, Pos(17)), None);

        let five = board(5, "..X../..X../..X../..X../..X..");
        let win = detect(&five, Pos(22)).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line, vec![Pos(2), Pos(7), Pos(12), Pos(17), Pos(22)]);
    }

    #[test]
    fn test_10x10_five_not_full_line() {
        let mut b = Board::new(10);
        for col in 3..8 {
            b = b.with_mark(Pos::from_row_col(6, col, 10), Mark::O).unwrap();
        }
        let win = detect(&b, Pos::from_row_col(6, 5, 10)).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line.len(), 5);
        assert_eq!(win.line[0], Pos(63));
        assert_eq!(win.line[4], Pos(67));
    }

    #[test]
    fn test_10x10_four_is_not_enough() {
        let mut b = Board::new(10);
        for i in 0..4 {
            b = b.with_mark(Pos::from_row_col(i, i, 10), Mark::X).unwrap();
        }
        assert_eq!(detect(&b, Pos::from_row_col(3, 3, 10)), None);
    }

    #[test]
    fn test_overline_reports_whole_run() {
        let mut b = Board::new(7);
        for row in 0..6 {
            b = b.with_mark(Pos::from_row_col(row, 0, 7), Mark::X).unwrap();
        }
        let win = detect(&b, Pos::from_row_col(2, 0, 7)).unwrap();
        assert_eq!(win.line.len(), 6);
    }

    #[test]
    fn test_run_stops_at_edge() {
        // Row 0 ends in X at col 4, row 1 starts with X at col 0: not a run.
        let b = board(5, "..XXX/XX.../...../...../.....");
        assert_eq!(detect(&b, Pos(4)), None);
        assert_eq!(detect(&b, Pos(5)), None);
    }

    #[test]
    fn test_anti_diagonal_on_larger_board() {
        let mut b = Board::new(6);
        for i in 0..5u8 {
            b = b.with_mark(Pos::from_row_col(i, 5 - i, 6), Mark::O).unwrap();
        }
        let win = detect(&b, Pos::from_row_col(4, 1, 6)).unwrap();
        assert_eq!(win.line.len(), 5);
        assert!(win.contains(Pos::from_row_col(0, 5, 6)));
        assert!(!win.contains(Pos::from_row_col(5, 0, 6)));
    }

    // ========== Classic Rule ==========

    #[test]
    fn test_classic_all_lines() {
        for line in &WIN_LINES {
            let mut b = Board::new(3);
            for &pos in line {
                b = b.with_mark(pos, Mark::O).unwrap();
            }
            let win = detect_classic(&b).unwrap();
            assert_eq!(win.mark, Mark::O);
            assert_eq!(win.line, line.to_vec(), "Failed for line {:?}", line);
        }
    }

    #[test]
    fn test_classic_ignores_last_move() {
        let b = board(3, "XXX/.O./..O");
        let win = WinRule::Classic.detect(&b, Some(Pos(8))).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(1), Pos(2)]);
        assert_eq!(WinRule::Classic.detect(&b, None), Some(win));
    }

    #[test]
    fn test_classic_table_order() {
        // Row 0 and column 0 both complete; rows come first in the table.
        let b = board(3, "XXX/X../X..");
        let win = detect_classic(&b).unwrap();
        assert_eq!(win.line, vec![Pos(0), Pos(1), Pos(2)]);
    }

    #[test]
    fn test_classic_wrong_size() {
        let b = board(4, "XXX./..../..../....");
        assert_eq!(detect_classic(&b), None);
    }

    #[test]
    fn test_scan_without_last_move() {
        let b = board(3, "XXX......");
        assert_eq!(WinRule::Scan.detect(&b, None), None);
        assert!(WinRule::Scan.detect(&b, Some(Pos(0))).is_some());
    }
}
