//! Player intents and escape-hatch events.
//!
//! Events carry at most one payload value (the tile being selected or
//! deselected). Transitions match on [`EventKind`] and read the payload
//! through [`Event::value`].

use serde::{Deserialize, Serialize};

/// An event sent to the game controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Leave the lobby and start playing.
    Start,
    /// Roll the dice.
    Roll,
    /// Add a tile to the current selection.
    SelectValue(u32),
    /// Remove a tile from the current selection.
    DeselectValue(u32),
    /// Close the selected tiles.
    SubmitMove,
    /// Start over after a win or loss.
    Retry,
    /// Return to the lobby after a win or loss.
    Lobby,
    /// Jump straight to `play.win`.
    Win,
    /// Jump straight to `play.lose`.
    Lose,
}

/// Event discriminant, used as the transition table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Start,
    Roll,
    SelectValue,
    DeselectValue,
    SubmitMove,
    Retry,
    Lobby,
    Win,
    Lose,
}

impl Event {
    /// The payload-free kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Start => EventKind::Start,
            Event::Roll => EventKind::Roll,
            Event::SelectValue(_) => EventKind::SelectValue,
            Event::DeselectValue(_) => EventKind::DeselectValue,
            Event::SubmitMove => EventKind::SubmitMove,
            Event::Retry => EventKind::Retry,
            Event::Lobby => EventKind::Lobby,
            Event::Win => EventKind::Win,
            Event::Lose => EventKind::Lose,
        }
    }

    /// The tile value carried by this event, if any.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        match self {
            Event::SelectValue(v) | Event::DeselectValue(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Start => "START",
            EventKind::Roll => "ROLL",
            EventKind::SelectValue => "SELECT_VALUE",
            EventKind::DeselectValue => "DESELECT_VALUE",
            EventKind::SubmitMove => "SUBMIT_MOVE",
            EventKind::Retry => "RETRY",
            EventKind::Lobby => "LOBBY",
            EventKind::Win => "WIN",
            EventKind::Lose => "LOSE",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.kind(), value),
            None => write!(f, "{}", self.kind()),
        }
    }
}
