//! Match state: stage, scores, innings progress, last-ball panel, history.
//!
//! ## GameState
//!
//! The single session-scoped record the whole match lives in:
//! - Flow stage and terminal flag
//! - Per-side scores and the chase target
//! - Toss winner and current batting side
//! - Last-ball choices and the transient status message
//! - Ball history
//! - RNG
//!
//! The state is created by the calling context, mutated in place by
//! `GameEngine` transitions, and read back after every call to render
//! the scoreboard, last-ball panel, status message, and result banner.

use serde::{Deserialize, Serialize};

use super::rng::MatchRng;
use super::side::{Side, SideMap};

/// Phase of the match flow.
///
/// Every stage except `GameOver` accepts exactly one or two external
/// inputs; `restart` is accepted everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for the user's toss number and even/odd call.
    #[default]
    TossChoice,
    /// User won the toss and must pick bat or bowl.
    BatOrBowlChoice,
    /// Balls are being played.
    Playing,
    /// Terminal. Only `restart` leaves this stage.
    GameOver,
}

/// Severity of the transient status message, for the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// What a single ball produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallOutcome {
    /// Runs credited to the batting side.
    Runs(u32),
    /// Both players picked the same number.
    Wicket,
}

/// A recorded ball.
///
/// Kept for the last-ball display and for replaying a match from its
/// recorded draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallRecord {
    /// Innings number (1 or 2).
    pub innings: u8,
    /// Side that was batting when the ball was played.
    pub batting: Side,
    pub user_choice: u8,
    pub computer_choice: u8,
    pub outcome: BallOutcome,
}

/// Final result of a completed match.
///
/// Decided by comparing raw accumulated scores, not by who reached the
/// target first. Scores are never clamped to the target, so the chasing
/// side can finish above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    UserWin,
    ComputerWin,
    Tie,
}

impl MatchResult {
    /// Compare two final scores.
    #[must_use]
    pub fn from_scores(user: u32, computer: u32) -> Self {
        match user.cmp(&computer) {
            std::cmp::Ordering::Greater => MatchResult::UserWin,
            std::cmp::Ordering::Less => MatchResult::ComputerWin,
            std::cmp::Ordering::Equal => MatchResult::Tie,
        }
    }
}

/// Complete match state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current flow stage.
    pub stage: Stage,

    /// Accumulated runs per side. Never decrease.
    pub scores: SideMap<u32>,

    /// Chase target. 0 while the first innings is in progress; once set
    /// (batting side's first-innings score + 1) it never changes.
    pub target: u32,

    /// Side currently batting. `None` until the toss is decided; flips
    /// exactly once per match, at the first-innings wicket.
    pub who_is_batting: Option<Side>,

    /// Who won the toss. `None` until the toss is resolved.
    pub toss_winner: Option<Side>,

    /// User's number on the most recent draw (toss or ball).
    pub last_user_choice: Option<u8>,

    /// Computer's number on the most recent draw (toss or ball).
    pub last_computer_choice: Option<u8>,

    /// Transient status message, overwritten by every transition.
    pub message: String,

    /// Severity of `message`.
    pub severity: Severity,

    /// True only in `Stage::GameOver`.
    pub game_over: bool,

    /// Every ball played this match, in order.
    pub balls: Vec<BallRecord>,

    /// Deterministic RNG. All match randomness draws from here.
    pub rng: MatchRng,
}

impl GameState {
    /// Create a fresh state with a known seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stage: Stage::TossChoice,
            scores: SideMap::with_value(0),
            target: 0,
            who_is_batting: None,
            toss_winner: None,
            last_user_choice: None,
            last_computer_choice: None,
            message: String::new(),
            severity: Severity::Info,
            game_over: false,
            balls: Vec::new(),
            rng: MatchRng::new(seed),
        }
    }

    /// Create a fresh state seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Reset every field to its initial value for a new match.
    ///
    /// The RNG stream continues rather than rewinding, so consecutive
    /// matches in one session see fresh draws.
    pub fn reset(&mut self) {
        self.stage = Stage::TossChoice;
        self.scores = SideMap::with_value(0);
        self.target = 0;
        self.who_is_batting = None;
        self.toss_winner = None;
        self.last_user_choice = None;
        self.last_computer_choice = None;
        self.message.clear();
        self.severity = Severity::Info;
        self.game_over = false;
        self.balls.clear();
    }

    /// Current innings number: 1 until the first wicket sets the target,
    /// 2 afterwards.
    #[must_use]
    pub fn innings(&self) -> u8 {
        if self.target == 0 {
            1
        } else {
            2
        }
    }

    /// Check if the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Result of the match, decided by raw score comparison.
    ///
    /// Returns `None` while the match is still in progress. Intended for
    /// the rendering layer's win/lose/tie banner.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if !self.game_over {
            return None;
        }
        Some(MatchResult::from_scores(
            self.scores[Side::User],
            self.scores[Side::Computer],
        ))
    }

    /// Record a played ball in history.
    pub fn record_ball(&mut self, record: BallRecord) {
        self.balls.push(record);
    }
}
