//! Game context: the tiles, dice and selection a controller owns.
//!
//! Uses `im` persistent vectors so each transition can produce a new
//! context from the old one without deep copies.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use crate::sets::sum;

/// Dice showing for the current turn. Two dice fit inline.
pub type Roll = SmallVec<[u32; 2]>;

/// A set of open tiles whose values add up to the roll.
pub type Move = Vec<u32>;

/// Unordered set of tile values.
pub type TileSet = FxHashSet<u32>;

/// Mutable game data, replaced wholesale by each transition.
///
/// ## Invariants
///
/// - `selected_values` only holds values from `remaining_numbers`
/// - Every entry of `possible_moves` is a subset of `remaining_numbers`
///   summing to the total of `current_roll`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    /// Tiles still open, in board order.
    pub remaining_numbers: Vector<u32>,

    /// Dice for this turn. Empty until the player rolls.
    pub current_roll: Roll,

    /// Every way to close tiles for the current roll.
    pub possible_moves: Vector<Move>,

    /// Tiles picked this turn, in the order they were picked.
    pub selected_values: Vector<u32>,
}

impl GameContext {
    /// Create a context with the given tiles open and nothing rolled.
    pub fn new(tiles: impl IntoIterator<Item = u32>) -> Self {
        Self {
            remaining_numbers: tiles.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The starting context for a game with this configuration.
    #[must_use]
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            remaining_numbers: config.all_tiles(),
            ..Self::default()
        }
    }

    /// Total shown on the dice.
    #[must_use]
    pub fn roll_total(&self) -> u32 {
        sum(&self.current_roll)
    }

    /// Total of the tiles selected so far.
    #[must_use]
    pub fn selected_total(&self) -> u32 {
        sum(&self.selected_values)
    }

    /// Is this tile still open?
    #[must_use]
    pub fn is_open(&self, value: u32) -> bool {
        self.remaining_numbers.iter().any(|&v| v == value)
    }

    /// Has this tile been selected this turn?
    #[must_use]
    pub fn is_selected(&self, value: u32) -> bool {
        self.selected_values.iter().any(|&v| v == value)
    }
}
