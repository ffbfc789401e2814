//! # hand-cricket
//!
//! A turn-based hand cricket match engine: toss, bat/bowl choice,
//! per-ball play, innings switch, and win detection between a user and
//! a uniformly random computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned state**: `GameState` is explicitly constructed and
//!    explicitly passed. No ambient singleton - the rendering layer owns
//!    the state and re-renders from it after every transition.
//!
//! 2. **Deterministic given state**: all randomness draws from the RNG
//!    inside `GameState`, so a seeded match replays identically and
//!    recorded matches can be re-run ball by ball.
//!
//! 3. **Inputs as data**: user interactions arrive as `Command` values,
//!    not callbacks. The engine applies them synchronously and returns;
//!    rendering is the caller's job.
//!
//! ## Match Flow
//!
//! ```text
//! TossChoice --(resolve_toss, user wins)----> BatOrBowlChoice
//! TossChoice --(resolve_toss, computer wins)-> Playing
//! BatOrBowlChoice --(choose_role)-----------> Playing
//! Playing --(play_ball, wicket, no target)---> Playing (sides switch, target set)
//! Playing --(play_ball, wicket, target set)--> GameOver
//! Playing --(play_ball, score >= target)-----> GameOver
//! any stage --(restart)----------------------> TossChoice
//! ```
//!
//! ## Example
//!
//! ```
//! use hand_cricket::engine::{MatchBuilder, Role, TossCall};
//! use hand_cricket::core::Stage;
//!
//! let (engine, mut state) = MatchBuilder::new().seed(42).build();
//!
//! engine.resolve_toss(&mut state, 3, TossCall::Even);
//! if state.stage == Stage::BatOrBowlChoice {
//!     engine.choose_role(&mut state, Role::Bat);
//! }
//! while !state.is_over() {
//!     engine.play_ball(&mut state, 4);
//! }
//! println!("{:?}", state.result());
//! ```
//!
//! ## Modules
//!
//! - `core`: sides, RNG, match state, snapshots
//! - `engine`: configuration, input vocabulary, transitions

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    BallOutcome, BallRecord, GameState, MatchResult, MatchRng, MatchRngState, MatchSnapshot,
    Severity, Side, SideMap, SnapshotError, Stage,
};

pub use crate::engine::{Command, GameEngine, MatchBuilder, MatchConfig, Role, TossCall};
