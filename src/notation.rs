//! Move-list notation for copying a game in and out.
//!
//! A game is written as whitespace-separated `(col,row)` tokens, 1-based,
//! in the order the moves were played:
//!
//! ```text
//! (2,2) (1,1) (3,3)
//! ```

use crate::{Error, Game, GameConfig, Pos, Result};

/// Format one move as `(col,row)`.
pub fn format_move(pos: Pos, size: u8) -> String {
    format!("({},{})", pos.col(size) + 1, pos.row(size) + 1)
}

/// Parse one `(col,row)` token.
pub fn parse_move(token: &str, size: u8) -> Result<Pos> {
    let invalid = || Error::InvalidNotation {
        token: token.to_string(),
    };

    let inner = token
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(invalid)?;
    let (col, row) = inner.split_once(',').ok_or_else(invalid)?;
    let col: u8 = col.trim().parse().map_err(|_| invalid())?;
    let row: u8 = row.trim().parse().map_err(|_| invalid())?;

    if col == 0 || row == 0 || col > size || row > size {
        return Err(invalid());
    }
    Ok(Pos::from_row_col(row - 1, col - 1, size))
}

/// Every move in the game's history, including moves after the current step.
pub fn export(game: &Game) -> String {
    game.positions()
        .iter()
        .map(|&pos| format_move(pos, game.size()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replay a notation string into a new game.
///
/// Replay stops once the game is over; any remaining tokens are ignored.
pub fn import(config: GameConfig, notation: &str) -> Result<Game> {
    let mut game = Game::new(config)?;

    for (i, token) in notation.split_whitespace().enumerate() {
        if game.status().is_over() {
            log::debug!("game over after {} moves, ignoring the rest", i);
            break;
        }
        let replay_err = |source: Error| Error::Replay {
            index: i + 1,
            token: token.to_string(),
            source: Box::new(source),
        };
        let pos = parse_move(token, config.size).map_err(replay_err)?;
        game.place(pos).map_err(replay_err)?;
    }

    log::debug!("imported {} moves", game.step());
    Ok(game)
}

impl Game {
    /// See [`export`].
    pub fn export_notation(&self) -> String {
        export(self)
    }

    /// Replace this game with one replayed from `notation` using the same
    /// config. On error the game is left as it was.
    pub fn import_notation(&mut self, notation: &str) -> Result<()> {
        *self = import(*self.config(), notation)?;
        Ok(())
    }
}
