//! Deterministic random number generation for match play.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! Every random event in a match (the computer's numbers, its bat/bowl
//! decision after winning the toss) draws from a single `MatchRng` owned
//! by the game state, so a seeded match replays identically.
//!
//! ```
//! use hand_cricket::core::MatchRng;
//!
//! let mut a = MatchRng::new(42);
//! let mut b = MatchRng::new(42);
//! assert_eq!(a.roll(6), b.roll(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for match randomness.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a uniform number in `1..=faces`.
    ///
    /// This is the computer picking a number for a ball or the toss.
    pub fn roll(&mut self, faces: u8) -> u8 {
        assert!(faces >= 1, "roll requires at least one face");
        self.inner.gen_range(1..=faces)
    }

    /// Draw a uniform 50/50 coin flip.
    ///
    /// Used for the computer's bat/bowl decision after winning the toss.
    pub fn coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for snapshots.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll(6), rng2.roll(6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MatchRng::new(1);
        let mut rng2 = MatchRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll(6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll(6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_in_range() {
        let mut rng = MatchRng::new(7);

        for _ in 0..1000 {
            let n = rng.roll(6);
            assert!((1..=6).contains(&n));
        }
    }

    #[test]
    fn test_roll_covers_all_faces() {
        let mut rng = MatchRng::new(99);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            seen[(rng.roll(6) - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "all faces should appear: {:?}", seen);
    }

    #[test]
    fn test_coin_hits_both_sides() {
        let mut rng = MatchRng::new(3);
        let flips: Vec<bool> = (0..100).map(|_| rng.coin()).collect();

        assert!(flips.contains(&true));
        assert!(flips.contains(&false));
    }

    #[test]
    #[should_panic(expected = "at least one face")]
    fn test_roll_zero_faces() {
        let mut rng = MatchRng::new(0);
        let _ = rng.roll(0);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = MatchRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.roll(6);
        }

        let state = rng.state();

        let expected: Vec<_> = (0..10).map(|_| rng.roll(6)).collect();

        let mut restored = MatchRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll(6)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
