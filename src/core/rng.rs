//! Dice and deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: The controller draws dice through [`DieRoller`], so
//!   front ends and tests can substitute [`ScriptedDice`]
//!
//! ## Usage
//!
//! ```
//! use shut_the_box::core::{roll_die, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let value = roll_die(&mut rng);
//! assert!((1..=6).contains(&value));
//!
//! // Same seed, same rolls
//! let mut replay = GameRng::new(42);
//! assert_eq!(roll_die(&mut replay), value);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Faces on a standard die.
pub const STANDARD_DIE_FACES: u32 = 6;

/// Source of die rolls.
///
/// Every call is an independent draw; the controller calls it once per die.
pub trait DieRoller {
    /// Roll a single die with `faces` sides, returning a value in `1..=faces`.
    fn roll_die(&mut self, faces: u32) -> u32;
}

/// Roll one standard six-sided die.
pub fn roll_die<R: DieRoller + ?Sized>(roller: &mut R) -> u32 {
    roller.roll_die(STANDARD_DIE_FACES)
}

/// Deterministic RNG for dice.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn OS seed.
    ///
    /// The seed is still recorded, so a game can be replayed from
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieRoller for GameRng {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.inner.gen_range(1..=faces.max(1))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice that replay a fixed script, cycling when exhausted.
///
/// Scripted values are clamped into `1..=faces`. An empty script always
/// rolls 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    script: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create dice that return `script` in order.
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of dice rolled so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl DieRoller for ScriptedDice {
    fn roll_die(&mut self, faces: u32) -> u32 {
        let value = if self.script.is_empty() {
            1
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value.clamp(1, faces.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(roll_die(&mut rng1), roll_die(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| roll_die(&mut rng1)).collect();
        let seq2: Vec<_> = (0..20).map(|_| roll_die(&mut rng2)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let value = roll_die(&mut rng);
            assert!((1..=6).contains(&value), "rolled {}", value);
        }
    }

    #[test]
    fn test_custom_faces() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let value = rng.roll_die(20);
            assert!((1..=20).contains(&value));
        }
    }

    #[test]
    fn test_entropy_records_seed() {
        let rng = GameRng::from_entropy();
        let mut a = rng.clone();
        let mut b = GameRng::new(rng.seed());
        assert_eq!(roll_die(&mut a), roll_die(&mut b));
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            roll_die(&mut rng);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| roll_die(&mut rng)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| roll_die(&mut restored)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_dice_cycle() {
        let mut dice = ScriptedDice::new(vec![3, 5]);
        assert_eq!(roll_die(&mut dice), 3);
        assert_eq!(roll_die(&mut dice), 5);
        assert_eq!(roll_die(&mut dice), 3);
        assert_eq!(dice.rolls(), 3);
    }

    #[test]
    fn test_scripted_dice_clamps() {
        let mut dice = ScriptedDice::new(vec![0, 9]);
        assert_eq!(roll_die(&mut dice), 1);
        assert_eq!(roll_die(&mut dice), 6);

        let mut empty = ScriptedDice::default();
        assert_eq!(roll_die(&mut empty), 1);
    }
}
