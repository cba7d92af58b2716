//! Game configuration.
//!
//! A config picks the board size and the win rule. It deserializes from
//! partial JSON (missing fields take their defaults), which is how the
//! browser frontend hands one over.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, WinRule};

/// Smallest supported board side.
pub const MIN_SIZE: u8 = 3;

/// Largest supported board side (a Go/Gomoku board).
pub const MAX_SIZE: u8 = 19;

/// Board size and win rule for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: u8,
    /// How a winning line is recognised.
    pub rule: WinRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            rule: WinRule::Scan,
        }
    }
}

impl GameConfig {
    /// Scan-rule config for a `size`×`size` board.
    pub fn with_size(size: u8) -> Self {
        Self {
            size,
            rule: WinRule::Scan,
        }
    }

    /// The fixed 3x3 table variant.
    pub fn classic() -> Self {
        Self {
            size: 3,
            rule: WinRule::Classic,
        }
    }

    /// Check the size bounds and that the rule can play on this size.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(Error::InvalidSize {
                size: self.size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        if self.rule == WinRule::Classic && self.size != 3 {
            return Err(Error::RuleRequiresSize {
                rule: self.rule,
                required: 3,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Marks in a row needed to win.
    pub fn run_length(&self) -> usize {
        self.rule.run_length(self.size)
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.size as usize * self.size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_3x3_scan() {
        let config = GameConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.rule, WinRule::Scan);
        assert_eq!(config.run_length(), 3);
        assert_eq!(config.cells(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_length_caps_at_five() {
        assert_eq!(GameConfig::with_size(3).run_length(), 3);
        assert_eq!(GameConfig::with_size(4).run_length(), 4);
        assert_eq!(GameConfig::with_size(5).run_length(), 5);
        assert_eq!(GameConfig::with_size(10).run_length(), 5);
        assert_eq!(GameConfig::with_size(19).run_length(), 5);
        assert_eq!(GameConfig::classic().run_length(), 3);
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(
            GameConfig::with_size(2).validate(),
            Err(Error::InvalidSize {
                size: 2,
                min: MIN_SIZE,
                max: MAX_SIZE
            })
        );
        assert!(GameConfig::with_size(19).validate().is_ok());
        assert!(GameConfig::with_size(20).validate().is_err());
    }

    #[test]
    fn test_classic_needs_3x3() {
        let config = GameConfig {
            size: 5,
            rule: WinRule::Classic,
        };
        assert!(matches!(
            config.validate(),
            Err(Error::RuleRequiresSize { required: 3, size: 5, .. })
        ));
        assert!(GameConfig::classic().validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 10}"#).unwrap();
        assert_eq!(config, GameConfig::with_size(10));

        let config: GameConfig = serde_json::from_str(r#"{"rule": "classic"}"#).unwrap();
        assert_eq!(config, GameConfig::classic());

        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
