//! Context updates.
//!
//! Each action takes the old context by value and returns the new one.
//! Only `RollDice` draws on outside state (the dice).

use serde::{Deserialize, Serialize};

use super::moves::possible_moves;
use crate::core::{DieRoller, Event, GameConfig, GameContext, Roll};

/// Named action referenced from the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextAction {
    /// Back to a fresh board.
    ResetGame,
    /// Drop the selection and the dice.
    ClearTurn,
    /// Roll every die.
    RollDice,
    /// Recompute `possible_moves` for the current roll.
    CalculateMoves,
    /// Append the event's tile to the selection.
    SelectValue,
    /// Remove every copy of the event's tile from the selection.
    DeselectValue,
    /// Close the selected tiles.
    UpdateRemainingNumbers,
}

impl ContextAction {
    /// Apply this action.
    pub fn apply<R: DieRoller + ?Sized>(
        self,
        context: GameContext,
        event: Option<&Event>,
        config: &GameConfig,
        roller: &mut R,
    ) -> GameContext {
        match self {
            ContextAction::ResetGame => reset_game(config),
            ContextAction::ClearTurn => clear_turn(context),
            ContextAction::RollDice => {
                let roll: Roll = (0..config.dice_count)
                    .map(|_| roller.roll_die(config.die_faces))
                    .collect();
                with_roll(context, roll)
            }
            ContextAction::CalculateMoves => calculate_moves(context),
            ContextAction::SelectValue => match event.and_then(Event::value) {
                Some(value) => select_value(context, value),
                None => context,
            },
            ContextAction::DeselectValue => match event.and_then(Event::value) {
                Some(value) => deselect_value(context, value),
                None => context,
            },
            ContextAction::UpdateRemainingNumbers => update_remaining_numbers(context),
        }
    }
}

/// A fresh context for a new game.
#[must_use]
pub fn reset_game(config: &GameConfig) -> GameContext {
    GameContext::initial(config)
}

/// Clear the selection and the dice, keeping the board.
#[must_use]
pub fn clear_turn(mut context: GameContext) -> GameContext {
    context.selected_values.clear();
    context.current_roll.clear();
    context
}

/// Record a roll.
#[must_use]
pub fn with_roll(mut context: GameContext, roll: Roll) -> GameContext {
    context.current_roll = roll;
    context
}

/// Recompute the moves available for the current roll.
#[must_use]
pub fn calculate_moves(mut context: GameContext) -> GameContext {
    let total = context.roll_total();
    context.possible_moves = possible_moves(&context.remaining_numbers, total);
    context
}

/// Append a tile to the selection. Re-selecting a tile appends it again.
#[must_use]
pub fn select_value(mut context: GameContext, value: u32) -> GameContext {
    context.selected_values.push_back(value);
    context
}

/// Remove every occurrence of a tile from the selection.
#[must_use]
pub fn deselect_value(mut context: GameContext, value: u32) -> GameContext {
    context.selected_values.retain(|&v| v != value);
    context
}

/// Close every selected tile.
#[must_use]
pub fn update_remaining_numbers(mut context: GameContext) -> GameContext {
    let selected = context.selected_values.clone();
    context
        .remaining_numbers
        .retain(|value| !selected.iter().any(|s| s == value));
    context
}
