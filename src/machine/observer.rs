//! Optional transition observers.
//!
//! Observers see a [`TransitionRecord`] after every event, timer, or
//! eventless transition has been applied. They get a shared reference
//! only, so they cannot steer the machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::StateValue;
use crate::core::Event;
use crate::rules::Guard;

/// What caused a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// An event was dispatched.
    Event(Event),
    /// A delayed transition fired after this delay.
    After(Duration),
    /// An eventless guard held.
    Always(Guard),
}

/// One processed step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Monotonic step number, starting at 0.
    pub sequence: u64,
    pub trigger: Trigger,
    pub from: StateValue,
    pub to: StateValue,
    /// False when an event was ignored (wrong state or failed guard).
    pub handled: bool,
    /// Scheduler time when the step ran.
    pub at: Duration,
}

/// Receives every step the controller takes.
pub trait Observer {
    fn on_transition(&mut self, record: &TransitionRecord);
}

impl<F> Observer for F
where
    F: FnMut(&TransitionRecord),
{
    fn on_transition(&mut self, record: &TransitionRecord) {
        self(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::state::PlayState;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |record: &TransitionRecord| seen.push(record.sequence);
            let record = TransitionRecord {
                sequence: 3,
                trigger: Trigger::Event(Event::Roll),
                from: StateValue::Play(PlayState::Waiting),
                to: StateValue::Play(PlayState::Rolling),
                handled: true,
                at: Duration::ZERO,
            };
            observer.on_transition(&record);
        }
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn test_record_serialization() {
        let record = TransitionRecord {
            sequence: 0,
            trigger: Trigger::After(Duration::from_millis(1000)),
            from: StateValue::Play(PlayState::Rolling),
            to: StateValue::Play(PlayState::Deciding),
            handled: true,
            at: Duration::from_millis(1000),
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
