//! Transition guards.
//!
//! Guards are pure and total over the context and event. A guard that
//! needs a payload the event does not carry is simply false.

use serde::{Deserialize, Serialize};

use crate::core::{Event, GameContext};
use crate::sets::sum;

/// Every tile is closed.
#[must_use]
pub fn did_player_win(context: &GameContext) -> bool {
    context.remaining_numbers.is_empty()
}

/// No set of open tiles matches the roll.
#[must_use]
pub fn did_player_lose(context: &GameContext) -> bool {
    context.possible_moves.is_empty()
}

/// The tile belongs to at least one possible move.
#[must_use]
pub fn can_select_value(context: &GameContext, value: u32) -> bool {
    context
        .possible_moves
        .iter()
        .any(|set| set.contains(&value))
}

/// Something is selected and it adds up to the roll.
#[must_use]
pub fn can_submit(context: &GameContext) -> bool {
    !context.selected_values.is_empty()
        && sum(&context.selected_values) == sum(&context.current_roll)
}

/// Named guard referenced from the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guard {
    /// Always passes.
    Unconditional,
    DidPlayerWin,
    DidPlayerLose,
    CanSelectValue,
    CanSubmit,
}

impl Guard {
    /// Evaluate the guard. `event` is `None` for eventless transitions.
    #[must_use]
    pub fn check(self, context: &GameContext, event: Option<&Event>) -> bool {
        match self {
            Guard::Unconditional => true,
            Guard::DidPlayerWin => did_player_win(context),
            Guard::DidPlayerLose => did_player_lose(context),
            Guard::CanSelectValue => event
                .and_then(Event::value)
                .is_some_and(|value| can_select_value(context, value)),
            Guard::CanSubmit => can_submit(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Roll;

    fn deciding(remaining: &[u32], roll: &[u32], moves: &[&[u32]]) -> GameContext {
        let mut context = GameContext::new(remaining.iter().copied());
        context.current_roll = Roll::from_slice(roll);
        context.possible_moves = moves.iter().map(|m| m.to_vec()).collect();
        context
    }

    #[test]
    fn test_win_and_lose() {
        let empty = GameContext::new([]);
        assert!(did_player_win(&empty));
        assert!(did_player_lose(&empty));

        let context = deciding(&[1, 2], &[1, 2], &[&[1, 2]]);
        assert!(!did_player_win(&context));
        assert!(!did_player_lose(&context));
    }

    #[test]
    fn test_can_select_value() {
        let context = deciding(&[1, 2, 3, 9], &[1, 2], &[&[1, 2], &[3]]);
        assert!(can_select_value(&context, 1));
        assert!(can_select_value(&context, 3));
        assert!(!can_select_value(&context, 9));
    }

    #[test]
    fn test_can_submit() {
        let mut context = deciding(&[1, 2, 3], &[1, 2], &[&[1, 2], &[3]]);
        assert!(!can_submit(&context), "empty selection");

        context.selected_values.push_back(1);
        assert!(!can_submit(&context), "short of roll total");

        context.selected_values.push_back(2);
        assert!(can_submit(&context));
    }

    #[test]
    fn test_guard_check_reads_payload() {
        let context = deciding(&[1, 2, 3], &[1, 2], &[&[3]]);

        assert!(Guard::CanSelectValue.check(&context, Some(&Event::SelectValue(3))));
        assert!(!Guard::CanSelectValue.check(&context, Some(&Event::SelectValue(2))));
        assert!(!Guard::CanSelectValue.check(&context, Some(&Event::Roll)));
        assert!(!Guard::CanSelectValue.check(&context, None));
        assert!(Guard::Unconditional.check(&context, None));
    }
}
