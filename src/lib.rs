//! # shut-the-box
//!
//! Rules engine for Shut the Box, a single-player dice and tile game.
//!
//! Tiles `1..=10` start open. Each turn the player rolls two dice and closes
//! any set of open tiles adding up to the roll. Closing every tile wins;
//! rolling a total no set of open tiles can make loses.
//!
//! ## Design Principles
//!
//! 1. **Table-Driven**: The state machine is static data (transitions,
//!    eventless guards, delayed transitions). The controller interprets it.
//!
//! 2. **Pure Transitions**: Context updates take the old context by value
//!    and return a new one. `im` vectors make the copies O(1).
//!
//! 3. **Silent Rejection**: Illegal events leave state and context alone.
//!    Nothing is reported to the caller.
//!
//! 4. **Deterministic**: Seeded ChaCha dice and a logical clock make any
//!    game replayable.
//!
//! ## Modules
//!
//! - `core`: Dice, configuration, context, events
//! - `sets`: Sum, powerset and set difference
//! - `rules`: Move enumeration, guards, context actions
//! - `machine`: State tree, transition table, scheduler, controller

pub mod core;
pub mod machine;
pub mod rules;
pub mod sets;

// Re-export commonly used types
pub use crate::core::{
    roll_die, ConfigError, DieRoller, Event, EventKind, GameConfig, GameContext, GameRng,
    GameRngState, Move, Roll, ScriptedDice, TileSet,
};

pub use crate::machine::{
    GameController, Observer, PlayState, Snapshot, StateValue, TileView, TransitionRecord,
    Trigger,
};

pub use crate::rules::{legal_choices, possible_moves};

pub use crate::sets::{difference, powerset, sum};
