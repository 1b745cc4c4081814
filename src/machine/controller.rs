//! The game controller.
//!
//! Owns the current state, the context, the dice and the scheduler, and
//! interprets the transition table. Processing is run-to-completion: an
//! event (or a due timer) is applied, then eventless guards are evaluated
//! until none holds, before the call returns.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, instrument};

use super::observer::{Observer, TransitionRecord, Trigger};
use super::scheduler::Scheduler;
use super::snapshot::Snapshot;
use super::state::StateValue;
use super::table::{self, Target};
use crate::core::{ConfigError, DieRoller, Event, GameConfig, GameContext, GameRng};
use crate::rules::ContextAction;

/// Shut the Box state machine.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use shut_the_box::{GameConfig, GameController};
///
/// let mut game = GameController::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(game.snapshot().path(), "play.waiting");
///
/// game.roll();
/// assert_eq!(game.snapshot().path(), "play.rolling");
///
/// game.advance(Duration::from_millis(1000));
/// assert!(game.snapshot().matches("play.deciding") || game.snapshot().matches("play.lose"));
/// ```
pub struct GameController<R: DieRoller = GameRng> {
    config: GameConfig,
    state: StateValue,
    context: GameContext,
    roller: R,
    scheduler: Scheduler,
    observer: Option<Box<dyn Observer>>,
    history: Vector<TransitionRecord>,
    sequence: u64,
}

impl GameController<GameRng> {
    /// Create a controller rolling seeded ChaCha dice.
    ///
    /// Uses `config.seed` if set, otherwise draws a seed from the OS.
    #[instrument(skip(config), fields(highest_tile = config.highest_tile, seed = ?config.seed))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "seeded dice");
        Self::with_roller(config, rng)
    }
}

impl<R: DieRoller> GameController<R> {
    /// Create a controller drawing dice from `roller`.
    pub fn with_roller(config: GameConfig, roller: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let context = GameContext::initial(&config);
        let mut controller = Self {
            config,
            state: StateValue::Lobby,
            context,
            roller,
            scheduler: Scheduler::new(),
            observer: None,
            history: Vector::new(),
            sequence: 0,
        };

        if !controller.config.start_in_lobby {
            let context = controller.context.clone();
            let (state, context) = controller.enter(StateValue::Lobby, Target::Play, context);
            controller.state = state;
            controller.context = context;
            controller.settle();
        }

        info!(state = %controller.state, "game controller ready");
        Ok(controller)
    }

    /// Attach an observer, called after every step.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // === Reading ===

    /// Active leaf state.
    #[must_use]
    pub fn state(&self) -> StateValue {
        self.state
    }

    /// Current tiles, dice and selection.
    #[must_use]
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Configuration the game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current state and context, cloned for a front end to hold on to.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            context: self.context.clone(),
            highest_tile: self.config.highest_tile,
        }
    }

    /// Recorded steps. Empty unless `record_history` is enabled.
    #[must_use]
    pub fn history(&self) -> &Vector<TransitionRecord> {
        &self.history
    }

    /// Logical clock and pending roll timer.
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// The dice.
    #[must_use]
    pub fn roller(&self) -> &R {
        &self.roller
    }

    // === Intents ===

    /// Send `START`.
    pub fn start(&mut self) {
        self.send(Event::Start);
    }

    /// Send `ROLL`.
    pub fn roll(&mut self) {
        self.send(Event::Roll);
    }

    /// Send `SELECT_VALUE(value)`.
    pub fn select_value(&mut self, value: u32) {
        self.send(Event::SelectValue(value));
    }

    /// Send `DESELECT_VALUE(value)`.
    pub fn deselect_value(&mut self, value: u32) {
        self.send(Event::DeselectValue(value));
    }

    /// Send `SUBMIT_MOVE`.
    pub fn submit_move(&mut self) {
        self.send(Event::SubmitMove);
    }

    /// Send `RETRY`.
    pub fn retry(&mut self) {
        self.send(Event::Retry);
    }

    /// Send `LOBBY`, clearing the board.
    pub fn lobby(&mut self) {
        self.send(Event::Lobby);
    }

    /// Dispatch an event.
    ///
    /// Events with no enabled transition in the current state are ignored:
    /// state and context are left untouched.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn send(&mut self, event: Event) {
        let Some(transition) = table::find_transition(self.state, &self.context, &event) else {
            debug!(%event, "event ignored");
            self.record(Trigger::Event(event), self.state, self.state, false);
            return;
        };

        self.take(
            Trigger::Event(event),
            Some(&event),
            transition.actions,
            transition.target,
        );
        self.settle();
    }

    /// Move the logical clock forward, firing any delayed transitions due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.scheduler.advance(elapsed);

        while let Some(timer) = self.scheduler.pop_due() {
            // Exit already cancels owned timers; drop any that slipped through
            if timer.owner != self.state {
                debug!(owner = %timer.owner, state = %self.state, "dropping stale timer");
                continue;
            }
            self.take(Trigger::After(timer.delay), None, &[], Some(timer.target));
            self.settle();
        }
    }

    // === Interpretation ===

    /// Apply one transition: exit, transition actions, entry.
    fn take(
        &mut self,
        trigger: Trigger,
        event: Option<&Event>,
        actions: &[ContextAction],
        target: Option<Target>,
    ) {
        let from = self.state;
        let context = self.run_actions(actions, self.context.clone(), event);

        let (to, context) = match target {
            Some(target) => {
                self.exit(from);
                self.enter(from, target, context)
            }
            None => (from, context),
        };

        self.state = to;
        self.context = context;
        self.record(trigger, from, to, true);
    }

    /// Take eventless transitions until none applies.
    fn settle(&mut self) {
        while let Some(play) = self.state.play_state() {
            let Some(always) = table::find_always(play, &self.context) else {
                break;
            };
            self.take(Trigger::Always(always.guard), None, &[], Some(always.target));
        }
    }

    fn exit(&mut self, from: StateValue) {
        let cancelled = self.scheduler.cancel_owned_by(from);
        if cancelled > 0 {
            debug!(state = %from, cancelled, "cancelled timers on exit");
        }
    }

    fn enter(
        &mut self,
        from: StateValue,
        target: Target,
        context: GameContext,
    ) -> (StateValue, GameContext) {
        let to = target.resolve();
        let actions = table::entry_actions(from, target);
        let context = self.run_actions(&actions, context, None);

        if let Some(delayed) = to.play_state().and_then(table::delayed_for) {
            self.scheduler
                .schedule(to, delayed.target, self.config.roll_delay);
        }

        (to, context)
    }

    fn run_actions(
        &mut self,
        actions: &[ContextAction],
        mut context: GameContext,
        event: Option<&Event>,
    ) -> GameContext {
        for &action in actions {
            context = action.apply(context, event, &self.config, &mut self.roller);
        }
        context
    }

    fn record(&mut self, trigger: Trigger, from: StateValue, to: StateValue, handled: bool) {
        let record = TransitionRecord {
            sequence: self.sequence,
            trigger,
            from,
            to,
            handled,
            at: self.scheduler.now(),
        };
        self.sequence += 1;

        if handled && from != to {
            debug!(%from, %to, "transition");
            if to.is_game_over() {
                info!(
                    outcome = %to,
                    remaining = self.context.remaining_numbers.len(),
                    "game over"
                );
            }
        }

        if self.config.record_history {
            self.history.push_back(record.clone());
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_transition(&record);
        }
    }
}

impl<R: DieRoller + std::fmt::Debug> std::fmt::Debug for GameController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("context", &self.context)
            .field("roller", &self.roller)
            .field("scheduler", &self.scheduler)
            .field("observed", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
