//! Game configuration.
//!
//! `GameConfig` fixes the shape of a game at startup:
//! - Which tiles exist (`1..=highest_tile`)
//! - How many dice are rolled and how many faces they have
//! - How long the dice tumble before the player may decide
//! - RNG seed, initial state, and whether transition history is kept
//!
//! The defaults are the classic game: ten tiles, two six-sided dice, and a
//! one second roll.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported tile count.
///
/// Move enumeration walks the powerset of open tiles, so this bounds it
/// at `2^12 - 1` subsets.
pub const MAX_TILES: u32 = 12;

/// Most dice rolled per turn.
pub const MAX_DICE: usize = 3;

/// Most faces per die.
pub const MAX_DIE_FACES: u32 = 20;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("highest tile must be between 1 and {max}, got {value}")]
    HighestTile { value: u32, max: u32 },
    #[error("dice count must be between 1 and {max}, got {value}")]
    DiceCount { value: usize, max: usize },
    #[error("die faces must be between 2 and {max}, got {value}")]
    DieFaces { value: u32, max: u32 },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Highest numbered tile. Tiles run `1..=highest_tile`.
    pub highest_tile: u32,

    /// Dice rolled each turn.
    pub dice_count: usize,

    /// Faces per die.
    pub die_faces: u32,

    /// Time spent in `rolling` before moving on to `deciding`.
    pub roll_delay: Duration,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Start in `lobby` and wait for `START` instead of entering `play`.
    pub start_in_lobby: bool,

    /// Keep a history of every transition.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            highest_tile: 10,
            dice_count: 2,
            die_faces: 6,
            roll_delay: Duration::from_millis(1000),
            seed: None,
            start_in_lobby: false,
            record_history: false,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highest tile.
    #[must_use]
    pub fn with_highest_tile(mut self, highest: u32) -> Self {
        self.highest_tile = highest;
        self
    }

    /// Set the number of dice.
    #[must_use]
    pub fn with_dice(mut self, count: usize, faces: u32) -> Self {
        self.dice_count = count;
        self.die_faces = faces;
        self
    }

    /// Set the rolling delay.
    #[must_use]
    pub fn with_roll_delay(mut self, delay: Duration) -> Self {
        self.roll_delay = delay;
        self
    }

    /// Use a fixed seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start in the lobby.
    #[must_use]
    pub fn in_lobby(mut self) -> Self {
        self.start_in_lobby = true;
        self
    }

    /// Record transition history.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Every tile in play at the start of a game, ascending.
    #[must_use]
    pub fn all_tiles(&self) -> Vector<u32> {
        (1..=self.highest_tile).collect()
    }

    /// Check that all values are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TILES).contains(&self.highest_tile) {
            return Err(ConfigError::HighestTile {
                value: self.highest_tile,
                max: MAX_TILES,
            });
        }
        if !(1..=MAX_DICE).contains(&self.dice_count) {
            return Err(ConfigError::DiceCount {
                value: self.dice_count,
                max: MAX_DICE,
            });
        }
        if !(2..=MAX_DIE_FACES).contains(&self.die_faces) {
            return Err(ConfigError::DieFaces {
                value: self.die_faces,
                max: MAX_DIE_FACES,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.highest_tile, 10);
        assert_eq!(config.dice_count, 2);
        assert_eq!(config.die_faces, 6);
        assert_eq!(config.roll_delay, Duration::from_millis(1000));
        assert!(!config.start_in_lobby);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_highest_tile(12)
            .with_dice(3, 8)
            .with_roll_delay(Duration::from_millis(250))
            .with_seed(7)
            .in_lobby()
            .with_history();

        assert_eq!(config.highest_tile, 12);
        assert_eq!(config.dice_count, 3);
        assert_eq!(config.die_faces, 8);
        assert_eq!(config.seed, Some(7));
        assert!(config.start_in_lobby);
        assert!(config.record_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_tiles() {
        let tiles = GameConfig::new().with_highest_tile(4).all_tiles();
        assert_eq!(tiles.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            GameConfig::new().with_highest_tile(0).validate(),
            Err(ConfigError::HighestTile { value: 0, max: MAX_TILES })
        );
        assert_eq!(
            GameConfig::new().with_highest_tile(13).validate(),
            Err(ConfigError::HighestTile { value: 13, max: MAX_TILES })
        );
        assert_eq!(
            GameConfig::new().with_dice(0, 6).validate(),
            Err(ConfigError::DiceCount { value: 0, max: MAX_DICE })
        );
        assert_eq!(
            GameConfig::new().with_dice(2, 1).validate(),
            Err(ConfigError::DieFaces { value: 1, max: MAX_DIE_FACES })
        );
    }

    #[test]
    fn test_error_message() {
        let err = GameConfig::new().with_highest_tile(20).validate().unwrap_err();
        assert_eq!(err.to_string(), "highest tile must be between 1 and 12, got 20");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"highest_tile": 9}"#).unwrap();
        assert_eq!(config.highest_tile, 9);
        assert_eq!(config.dice_count, 2);
        assert_eq!(config.seed, None);
    }
}
