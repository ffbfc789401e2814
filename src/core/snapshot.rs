//! Session snapshots: capture and restore a match in progress.
//!
//! A `MatchSnapshot` is a fully serializable image of a `GameState`,
//! including the RNG position, so a restored match continues with the
//! exact draw sequence the interrupted one would have seen.
//!
//! Two codecs are exposed: bincode for compact session storage and JSON
//! for debugging and inspection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::{MatchRng, MatchRngState};
use super::side::{Side, SideMap};
use super::state::{BallRecord, GameState, Severity, Stage};

/// Snapshot codec failures.
///
/// Unlike engine contract violations (which panic), codec failures are
/// recoverable: a caller handed corrupt bytes should get an error back.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encode error: {0}")]
    Encode(#[source] bincode::Error),

    #[error("snapshot decode error: {0}")]
    Decode(#[source] bincode::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable image of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub stage: Stage,
    pub scores: SideMap<u32>,
    pub target: u32,
    pub who_is_batting: Option<Side>,
    pub toss_winner: Option<Side>,
    pub last_user_choice: Option<u8>,
    pub last_computer_choice: Option<u8>,
    pub message: String,
    pub severity: Severity,
    pub game_over: bool,
    pub balls: Vec<BallRecord>,
    pub rng: MatchRngState,
}

impl MatchSnapshot {
    /// Encode to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }

    /// Encode to a JSON string.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON string produced by `to_json`.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GameState {
    /// Capture the match, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        log::debug!("capturing snapshot at stage {:?}", self.stage);
        MatchSnapshot {
            stage: self.stage,
            scores: self.scores,
            target: self.target,
            who_is_batting: self.who_is_batting,
            toss_winner: self.toss_winner,
            last_user_choice: self.last_user_choice,
            last_computer_choice: self.last_computer_choice,
            message: self.message.clone(),
            severity: self.severity,
            game_over: self.game_over,
            balls: self.balls.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a match from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &MatchSnapshot) -> Self {
        log::debug!("restoring snapshot at stage {:?}", snapshot.stage);
        Self {
            stage: snapshot.stage,
            scores: snapshot.scores,
            target: snapshot.target,
            who_is_batting: snapshot.who_is_batting,
            toss_winner: snapshot.toss_winner,
            last_user_choice: snapshot.last_user_choice,
            last_computer_choice: snapshot.last_computer_choice,
            message: snapshot.message.clone(),
            severity: snapshot.severity,
            game_over: snapshot.game_over,
            balls: snapshot.balls.clone(),
            rng: MatchRng::from_state(&snapshot.rng),
        }
    }
}
