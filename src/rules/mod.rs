//! Shut the Box rules.
//!
//! - `moves`: which tile sets can be closed for a roll, and which tiles a
//!   player can still pick given a partial selection
//! - `guards`: the predicates that gate transitions
//! - `actions`: pure context updates applied by transitions
//!
//! The state machine calls into these but never inspects tiles itself.

pub mod actions;
pub mod guards;
pub mod moves;

pub use actions::ContextAction;
pub use guards::{can_select_value, can_submit, did_player_lose, did_player_win, Guard};
pub use moves::{legal_choices, possible_moves};
