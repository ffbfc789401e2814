//! Match configuration.
//!
//! The rules never hardcode the choice range - matches configure it at
//! startup. The standard game uses six faces.

use serde::{Deserialize, Serialize};

use super::engine::GameEngine;
use crate::core::GameState;

/// Match parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Numbers both players pick from: `1..=faces`.
    pub faces: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { faces: 6 }
    }
}

/// Builder for creating a match.
///
/// ## Example
///
/// ```
/// use hand_cricket::engine::MatchBuilder;
///
/// let (engine, state) = MatchBuilder::new().seed(42).build();
/// assert_eq!(engine.config().faces, 6);
/// assert!(!state.is_over());
/// ```
pub struct MatchBuilder {
    faces: u8,
    seed: Option<u64>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            faces: MatchConfig::default().faces,
            seed: None,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the choice range. Must be at least 2.
    pub fn faces(mut self, faces: u8) -> Self {
        assert!(faces >= 2, "Matches need at least 2 faces");
        self.faces = faces;
        self
    }

    /// Seed the match RNG for a deterministic game.
    ///
    /// Without a seed the state is seeded from the operating system.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the engine and initial state.
    pub fn build(self) -> (GameEngine, GameState) {
        let state = match self.seed {
            Some(seed) => GameState::new(seed),
            None => GameState::from_entropy(),
        };
        let engine = GameEngine::new(MatchConfig { faces: self.faces });
        (engine, state)
    }
}
