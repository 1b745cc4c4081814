//! Read-only view of the controller for front ends.
//!
//! Everything derived here (legal choices, tile flags, button states) is
//! recomputed from the snapshot on demand and never stored.

use serde::{Deserialize, Serialize};

use super::state::{PlayState, StateValue};
use crate::core::{GameContext, TileSet};
use crate::rules::{can_submit, legal_choices};

/// State path plus context at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: StateValue,
    pub context: GameContext,
    /// Highest tile on the board, closed or not.
    pub highest_tile: u32,
}

/// How one tile should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub value: u32,
    /// Still in play. Closed tiles are shut for the rest of the game.
    pub open: bool,
    /// Picked this turn.
    pub selected: bool,
    /// Can be picked now without ruling out every move.
    pub selectable: bool,
}

impl Snapshot {
    /// Dotted state path, e.g. `play.deciding`.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.state.path()
    }

    /// Does the current state match or sit beneath `path`?
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.state.matches(path)
    }

    fn is_deciding(&self) -> bool {
        self.state == StateValue::Play(PlayState::Deciding)
    }

    /// Tiles the player may still add to the selection.
    ///
    /// Empty outside `play.deciding`.
    #[must_use]
    pub fn legal_choices(&self) -> TileSet {
        if !self.is_deciding() {
            return TileSet::default();
        }
        legal_choices(&self.context.possible_moves, &self.context.selected_values)
    }

    /// Every tile on the board, lowest first.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileView> {
        let choices = self.legal_choices();
        (1..=self.highest_tile)
            .map(|value| TileView {
                value,
                open: self.context.is_open(value),
                selected: self.context.is_selected(value),
                selectable: choices.contains(&value),
            })
            .collect()
    }

    /// Would `ROLL` be accepted?
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.state == StateValue::Play(PlayState::Waiting)
    }

    /// Would `SUBMIT_MOVE` be accepted?
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_deciding() && can_submit(&self.context)
    }

    /// Are the dice still tumbling?
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.state == StateValue::Play(PlayState::Rolling)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}
