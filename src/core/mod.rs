//! Core match types: sides, state, RNG, snapshots.
//!
//! This module contains the fundamental building blocks the rules in
//! `engine` operate on.

pub mod rng;
pub mod side;
pub mod snapshot;
pub mod state;

pub use rng::{MatchRng, MatchRngState};
pub use side::{Side, SideMap};
pub use snapshot::{MatchSnapshot, SnapshotError};
pub use state::{BallOutcome, BallRecord, GameState, MatchResult, Severity, Stage};
