//! Transition table.
//!
//! The whole machine is described by static data:
//! - [`TRANSITIONS`]: `(source, event) -> (guard, actions, target)`, checked
//!   in order, leaves before `play`
//! - [`ALWAYS`]: eventless guards evaluated whenever the machine settles
//! - [`DELAYED`]: one-shot timers armed on entry and cancelled on exit
//! - [`entry_actions`]: what entering a state does to the context
//!
//! The controller interprets these; nothing here mutates anything.

use smallvec::SmallVec;

use super::state::{PlayState, StateValue};
use crate::core::{Event, EventKind, GameContext};
use crate::rules::{ContextAction, Guard};

/// States a transition applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Exactly this state.
    State(StateValue),
    /// Any leaf inside `play`.
    Play,
}

impl Source {
    /// Does this source cover `state`?
    #[must_use]
    pub fn covers(self, state: StateValue) -> bool {
        match self {
            Source::State(source) => source == state,
            Source::Play => state.play_state().is_some(),
        }
    }
}

/// Where a transition goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Lobby,
    /// Re-enter `play` from the top, resetting the game.
    Play,
    /// A leaf inside `play`, without re-entering `play`.
    Leaf(PlayState),
}

impl Target {
    /// The leaf state this target ends up in.
    #[must_use]
    pub const fn resolve(self) -> StateValue {
        match self {
            Target::Lobby => StateValue::Lobby,
            Target::Play => StateValue::Play(PlayState::Waiting),
            Target::Leaf(state) => StateValue::Play(state),
        }
    }
}

/// An event-driven transition.
///
/// `target: None` is an internal transition: actions run, no state is
/// exited or entered.
#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub source: Source,
    pub event: EventKind,
    pub guard: Guard,
    pub actions: &'static [ContextAction],
    pub target: Option<Target>,
}

/// An eventless transition taken as soon as its guard holds.
#[derive(Clone, Copy, Debug)]
pub struct Always {
    pub source: PlayState,
    pub guard: Guard,
    pub target: Target,
}

/// A transition taken once the configured delay has passed in `source`.
#[derive(Clone, Copy, Debug)]
pub struct Delayed {
    pub source: PlayState,
    pub target: Target,
}

const WAITING: StateValue = StateValue::Play(PlayState::Waiting);
const DECIDING: StateValue = StateValue::Play(PlayState::Deciding);
const WIN: StateValue = StateValue::Play(PlayState::Win);
const LOSE: StateValue = StateValue::Play(PlayState::Lose);

/// Every event-driven transition.
pub static TRANSITIONS: &[Transition] = &[
    Transition {
        source: Source::State(StateValue::Lobby),
        event: EventKind::Start,
        guard: Guard::Unconditional,
        actions: &[],
        target: Some(Target::Play),
    },
    Transition {
        source: Source::State(WAITING),
        event: EventKind::Roll,
        guard: Guard::Unconditional,
        actions: &[],
        target: Some(Target::Leaf(PlayState::Rolling)),
    },
    Transition {
        source: Source::State(DECIDING),
        event: EventKind::SelectValue,
        guard: Guard::CanSelectValue,
        actions: &[ContextAction::SelectValue],
        target: None,
    },
    Transition {
        source: Source::State(DECIDING),
        event: EventKind::DeselectValue,
        guard: Guard::Unconditional,
        actions: &[ContextAction::DeselectValue],
        target: None,
    },
    Transition {
        source: Source::State(DECIDING),
        event: EventKind::SubmitMove,
        guard: Guard::CanSubmit,
        actions: &[ContextAction::UpdateRemainingNumbers],
        target: Some(Target::Leaf(PlayState::Waiting)),
    },
    Transition {
        source: Source::State(WIN),
        event: EventKind::Lobby,
        guard: Guard::Unconditional,
        actions: &[ContextAction::ResetGame],
        target: Some(Target::Lobby),
    },
    Transition {
        source: Source::State(WIN),
        event: EventKind::Retry,
        guard: Guard::Unconditional,
        actions: &[ContextAction::ResetGame],
        target: Some(Target::Play),
    },
    Transition {
        source: Source::State(LOSE),
        event: EventKind::Lobby,
        guard: Guard::Unconditional,
        actions: &[ContextAction::ResetGame],
        target: Some(Target::Lobby),
    },
    Transition {
        source: Source::State(LOSE),
        event: EventKind::Retry,
        guard: Guard::Unconditional,
        actions: &[ContextAction::ResetGame],
        target: Some(Target::Play),
    },
    Transition {
        source: Source::Play,
        event: EventKind::Win,
        guard: Guard::Unconditional,
        actions: &[],
        target: Some(Target::Leaf(PlayState::Win)),
    },
    Transition {
        source: Source::Play,
        event: EventKind::Lose,
        guard: Guard::Unconditional,
        actions: &[],
        target: Some(Target::Leaf(PlayState::Lose)),
    },
];

/// Eventless transitions.
pub static ALWAYS: &[Always] = &[
    Always {
        source: PlayState::Waiting,
        guard: Guard::DidPlayerWin,
        target: Target::Leaf(PlayState::Win),
    },
    Always {
        source: PlayState::Deciding,
        guard: Guard::DidPlayerLose,
        target: Target::Leaf(PlayState::Lose),
    },
];

/// Delayed transitions.
pub static DELAYED: &[Delayed] = &[Delayed {
    source: PlayState::Rolling,
    target: Target::Leaf(PlayState::Deciding),
}];

/// The first enabled transition for `event` in `state`, if any.
#[must_use]
pub fn find_transition(
    state: StateValue,
    context: &GameContext,
    event: &Event,
) -> Option<&'static Transition> {
    let kind = event.kind();
    TRANSITIONS.iter().find(|transition| {
        transition.event == kind
            && transition.source.covers(state)
            && transition.guard.check(context, Some(event))
    })
}

/// The first eventless transition whose guard holds in `state`, if any.
#[must_use]
pub fn find_always(state: PlayState, context: &GameContext) -> Option<&'static Always> {
    ALWAYS
        .iter()
        .find(|always| always.source == state && always.guard.check(context, None))
}

/// The delayed transition armed on entry to `state`, if any.
#[must_use]
pub fn delayed_for(state: PlayState) -> Option<&'static Delayed> {
    DELAYED.iter().find(|delayed| delayed.source == state)
}

/// Entry actions run when moving from `from` to `target`, outermost first.
///
/// Entering `play` from outside, or re-entering it through [`Target::Play`],
/// resets the game before the leaf's own entry runs.
#[must_use]
pub fn entry_actions(from: StateValue, target: Target) -> SmallVec<[ContextAction; 4]> {
    let mut actions = SmallVec::new();

    let enters_play = match target {
        Target::Lobby => false,
        Target::Play => true,
        Target::Leaf(_) => from.play_state().is_none(),
    };
    if enters_play {
        actions.push(ContextAction::ResetGame);
    }

    match target.resolve() {
        StateValue::Play(PlayState::Waiting) => actions.push(ContextAction::ClearTurn),
        StateValue::Play(PlayState::Rolling) => {
            actions.push(ContextAction::RollDice);
            actions.push(ContextAction::CalculateMoves);
        }
        _ => {}
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Roll;

    #[test]
    fn test_source_covers() {
        assert!(Source::Play.covers(DECIDING));
        assert!(!Source::Play.covers(StateValue::Lobby));
        assert!(Source::State(WIN).covers(WIN));
        assert!(!Source::State(WIN).covers(LOSE));
    }

    #[test]
    fn test_roll_only_from_waiting() {
        let context = GameContext::new(1..=10);
        assert!(find_transition(WAITING, &context, &Event::Roll).is_some());
        assert!(find_transition(DECIDING, &context, &Event::Roll).is_none());
        assert!(find_transition(StateValue::Lobby, &context, &Event::Roll).is_none());
    }

    #[test]
    fn test_start_only_from_lobby() {
        let context = GameContext::new(1..=10);
        assert!(find_transition(StateValue::Lobby, &context, &Event::Start).is_some());
        assert!(find_transition(WAITING, &context, &Event::Start).is_none());
    }

    #[test]
    fn test_select_guarded() {
        let mut context = GameContext::new(1..=10);
        context.current_roll = Roll::from_slice(&[1, 1]);
        context.possible_moves.push_back(vec![2]);

        assert!(find_transition(DECIDING, &context, &Event::SelectValue(2)).is_some());
        assert!(find_transition(DECIDING, &context, &Event::SelectValue(5)).is_none());
    }

    #[test]
    fn test_escape_hatches_from_any_play_state() {
        let context = GameContext::new(1..=10);
        for state in [PlayState::Waiting, PlayState::Rolling, PlayState::Deciding] {
            let transition = find_transition(StateValue::Play(state), &context, &Event::Win);
            assert_eq!(transition.and_then(|t| t.target), Some(Target::Leaf(PlayState::Win)));
        }
        assert!(find_transition(StateValue::Lobby, &context, &Event::Lose).is_none());
    }

    #[test]
    fn test_game_over_exits_reset_board() {
        let context = GameContext::new(1..=10);
        for state in [WIN, LOSE] {
            for event in [Event::Lobby, Event::Retry] {
                let transition = find_transition(state, &context, &event).unwrap();
                assert_eq!(transition.actions, &[ContextAction::ResetGame]);
            }
        }
    }

    #[test]
    fn test_always_guards() {
        let empty = GameContext::new([]);
        assert!(find_always(PlayState::Waiting, &empty).is_some());
        assert!(find_always(PlayState::Deciding, &empty).is_some());

        let full = GameContext::new(1..=10);
        assert!(find_always(PlayState::Waiting, &full).is_none());
        assert!(find_always(PlayState::Rolling, &empty).is_none());
    }

    #[test]
    fn test_delayed_only_rolling() {
        assert!(delayed_for(PlayState::Rolling).is_some());
        assert!(delayed_for(PlayState::Deciding).is_none());
    }

    #[test]
    fn test_entry_actions() {
        assert_eq!(
            entry_actions(StateValue::Lobby, Target::Play).as_slice(),
            &[ContextAction::ResetGame, ContextAction::ClearTurn]
        );
        assert_eq!(
            entry_actions(WIN, Target::Play).as_slice(),
            &[ContextAction::ResetGame, ContextAction::ClearTurn]
        );
        assert_eq!(
            entry_actions(DECIDING, Target::Leaf(PlayState::Waiting)).as_slice(),
            &[ContextAction::ClearTurn]
        );
        assert_eq!(
            entry_actions(WAITING, Target::Leaf(PlayState::Rolling)).as_slice(),
            &[ContextAction::RollDice, ContextAction::CalculateMoves]
        );
        assert!(entry_actions(WIN, Target::Lobby).is_empty());
    }
}
