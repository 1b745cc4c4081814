//! Controller states.
//!
//! ```text
//! game
//! ├── lobby
//! └── play
//!     ├── waiting
//!     ├── rolling
//!     ├── deciding
//!     ├── win
//!     └── lose
//! ```
//!
//! `play` is compound; the controller is always in one of its leaves while
//! playing. States are addressed by dotted paths such as `play.deciding`.

use serde::{Deserialize, Serialize};

/// Leaf states inside `play`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayState {
    /// Waiting for the player to roll.
    Waiting,
    /// Dice are tumbling.
    Rolling,
    /// Player is picking tiles.
    Deciding,
    /// Every tile closed.
    Win,
    /// No move for the roll.
    Lose,
}

/// The active leaf state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateValue {
    Lobby,
    Play(PlayState),
}

impl StateValue {
    /// Full dotted path, e.g. `play.rolling`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            StateValue::Lobby => "lobby",
            StateValue::Play(PlayState::Waiting) => "play.waiting",
            StateValue::Play(PlayState::Rolling) => "play.rolling",
            StateValue::Play(PlayState::Deciding) => "play.deciding",
            StateValue::Play(PlayState::Win) => "play.win",
            StateValue::Play(PlayState::Lose) => "play.lose",
        }
    }

    /// Does this state match `path` or sit beneath it?
    ///
    /// `play.win` matches `"play.win"` and `"play"`, but not `"pl"`.
    #[must_use]
    pub fn matches(self, path: &str) -> bool {
        let full = self.path();
        match full.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }

    /// The `play` substate, if playing.
    #[must_use]
    pub const fn play_state(self) -> Option<PlayState> {
        match self {
            StateValue::Play(state) => Some(state),
            StateValue::Lobby => None,
        }
    }

    /// Is this `play.win` or `play.lose`?
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, StateValue::Play(PlayState::Win | PlayState::Lose))
    }
}

impl std::fmt::Display for StateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
