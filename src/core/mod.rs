//! Core game types: dice, configuration, context, events.
//!
//! Everything the rules and the state machine share lives here. Nothing in
//! this module knows about states or transitions.

pub mod config;
pub mod context;
pub mod event;
pub mod rng;

pub use config::{ConfigError, GameConfig, MAX_DICE, MAX_DIE_FACES, MAX_TILES};
pub use context::{GameContext, Move, Roll, TileSet};
pub use event::{Event, EventKind};
pub use rng::{roll_die, DieRoller, GameRng, GameRngState, ScriptedDice, STANDARD_DIE_FACES};
