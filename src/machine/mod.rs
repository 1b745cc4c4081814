//! The game controller state machine.
//!
//! ## Structure
//!
//! - `state`: the `lobby` / `play.*` state tree
//! - `table`: transitions, eventless guards, delayed transitions, entry actions
//! - `scheduler`: logical-clock timers for delayed transitions
//! - `observer`: opt-in transition records for debugging
//! - `snapshot`: read-only projections for front ends
//! - `controller`: [`GameController`], which interprets the table
//!
//! ## Lifecycle
//!
//! ```text
//! lobby --START--> play.waiting --ROLL--> play.rolling --(delay)--> play.deciding
//!                      ^   |                                          |    |
//!                      |   +--(no tiles left)--> play.win             |    |
//!                      +----------------SUBMIT_MOVE-------------------+    |
//!                                                 play.lose <--(no move)---+
//! ```
//!
//! `play.win` and `play.lose` accept `RETRY` and `LOBBY`; both reset the board.

pub mod controller;
pub mod observer;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod table;

pub use controller::GameController;
pub use observer::{Observer, TransitionRecord, Trigger};
pub use scheduler::{Scheduler, Timer, TimerId};
pub use snapshot::{Snapshot, TileView};
pub use state::{PlayState, StateValue};
pub use table::{Source, Target};
