//! Match rules: toss resolution, role choice, per-ball play.
//!
//! `GameEngine` applies transitions to a caller-owned `GameState` and
//! never holds state of its own; the rendering layer owns the state,
//! calls a transition per user input, and re-renders from the fields.
//!
//! Randomness draws from `state.rng`, so a transition is deterministic
//! given the state it receives. The `_with` variants take the computer's
//! draw as an argument instead - they are what replaying a recorded
//! match uses, since every `BallRecord` stores both numbers.
//!
//! Out-of-range numbers and wrong-stage calls are caller contract
//! violations and fail fast; there is no recoverable error path here.

use log::debug;

use super::command::{Command, Role, TossCall};
use super::config::MatchConfig;
use crate::core::{BallOutcome, BallRecord, GameState, Severity, Side, Stage};

/// The rules engine.
///
/// ## Example
///
/// ```
/// use hand_cricket::engine::{MatchBuilder, TossCall};
///
/// let (engine, mut state) = MatchBuilder::new().seed(42).build();
/// engine.resolve_toss(&mut state, 3, TossCall::Even);
/// assert!(state.toss_winner.is_some());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GameEngine {
    config: MatchConfig,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl GameEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    fn assert_choice(&self, number: u8) {
        assert!(
            (1..=self.config.faces).contains(&number),
            "choice {} outside 1..={}",
            number,
            self.config.faces
        );
    }

    /// Resolve the toss: the user's number and even/odd call against a
    /// fresh computer draw.
    ///
    /// If the call matches the parity of the sum, the user wins the toss
    /// and must pick bat or bowl. Otherwise the computer wins, picks its
    /// own role at random, and play begins directly.
    pub fn resolve_toss(&self, state: &mut GameState, number: u8, call: TossCall) {
        let computer_number = state.rng.roll(self.config.faces);
        self.resolve_toss_with(state, number, call, computer_number);
    }

    /// Resolve the toss with a known computer number (replays).
    pub fn resolve_toss_with(
        &self,
        state: &mut GameState,
        number: u8,
        call: TossCall,
        computer_number: u8,
    ) {
        assert_eq!(
            state.stage,
            Stage::TossChoice,
            "resolve_toss is only valid in the TossChoice stage"
        );
        self.assert_choice(number);
        self.assert_choice(computer_number);

        state.last_user_choice = Some(number);
        state.last_computer_choice = Some(computer_number);

        let total = u32::from(number) + u32::from(computer_number);
        let parity = TossCall::of_total(total);

        if call == parity {
            state.toss_winner = Some(Side::User);
            state.stage = Stage::BatOrBowlChoice;
            state.message = format!("It's {total} ({parity}). You won the toss!");
            state.severity = Severity::Success;
            debug!("toss: {number} + {computer_number} = {total} ({parity}), user wins");
        } else {
            state.toss_winner = Some(Side::Computer);
            // Computer makes its own bat/bowl decision, 50/50.
            let computer_bats = state.rng.coin();
            let batting = if computer_bats {
                Side::Computer
            } else {
                Side::User
            };
            let decision = if computer_bats { "batting" } else { "bowling" };
            state.who_is_batting = Some(batting);
            state.stage = Stage::Playing;
            state.message = format!(
                "It's {total} ({parity}). The computer won the toss and chose to {decision}."
            );
            state.severity = Severity::Warning;
            debug!(
                "toss: {number} + {computer_number} = {total} ({parity}), computer wins and is {decision}"
            );
        }
    }

    /// Apply the user's bat/bowl decision after winning the toss.
    pub fn choose_role(&self, state: &mut GameState, role: Role) {
        assert_eq!(
            state.stage,
            Stage::BatOrBowlChoice,
            "choose_role is only valid in the BatOrBowlChoice stage"
        );

        let batting = match role {
            Role::Bat => Side::User,
            Role::Bowl => Side::Computer,
        };
        state.who_is_batting = Some(batting);
        state.stage = Stage::Playing;
        debug!("user won the toss and chose to {role:?}, {batting} bats first");
    }

    /// Play one ball: the user's number against a fresh computer draw.
    pub fn play_ball(&self, state: &mut GameState, choice: u8) {
        let computer_choice = state.rng.roll(self.config.faces);
        self.play_ball_with(state, choice, computer_choice);
    }

    /// Play one ball with a known computer number (replays).
    ///
    /// Equal numbers are a wicket: in the first innings that sets the
    /// target to the batting side's score plus one and switches the
    /// batting side; in the second it ends the match with scores
    /// untouched. Any other pair credits the batting side's own number,
    /// and in the second innings the match ends as soon as either score
    /// reaches the target. A wicket never also scores, and the scoring
    /// ball that ends a chase is not clamped to the target.
    pub fn play_ball_with(&self, state: &mut GameState, choice: u8, computer_choice: u8) {
        assert_eq!(
            state.stage,
            Stage::Playing,
            "play_ball is only valid in the Playing stage"
        );
        self.assert_choice(choice);
        self.assert_choice(computer_choice);

        let batting = state
            .who_is_batting
            .expect("Playing stage requires a batting side");
        let innings = state.innings();

        state.last_user_choice = Some(choice);
        state.last_computer_choice = Some(computer_choice);

        if choice == computer_choice {
            state.record_ball(BallRecord {
                innings,
                batting,
                user_choice: choice,
                computer_choice,
                outcome: BallOutcome::Wicket,
            });
            state.message = "OUT! Wicket Down!".to_string();
            state.severity = Severity::Error;

            if state.target == 0 {
                // First innings over: set the target and switch sides.
                state.target = state.scores[batting] + 1;
                state.who_is_batting = Some(batting.opponent());
                debug!(
                    "wicket ends innings 1: target {}, {} now batting",
                    state.target,
                    batting.opponent()
                );
            } else {
                // Second innings over. Scores stay as they are.
                state.game_over = true;
                state.stage = Stage::GameOver;
                debug!("wicket ends the chase: {:?}", state.result());
            }
            return;
        }

        // No wicket: the batting side's own number is the runs scored.
        let runs = u32::from(match batting {
            Side::User => choice,
            Side::Computer => computer_choice,
        });
        state.scores[batting] += runs;
        state.record_ball(BallRecord {
            innings,
            batting,
            user_choice: choice,
            computer_choice,
            outcome: BallOutcome::Runs(runs),
        });
        match batting {
            Side::User => {
                state.message = format!("You scored {runs} runs!");
                state.severity = Severity::Success;
            }
            Side::Computer => {
                state.message = format!("Computer scored {runs} runs.");
                state.severity = Severity::Info;
            }
        }
        debug!("{batting} scored {runs}, scores {}/{}", state.scores[Side::User], state.scores[Side::Computer]);

        // Chase check, second innings only.
        if state.target > 0
            && (state.scores[Side::User] >= state.target
                || state.scores[Side::Computer] >= state.target)
        {
            state.game_over = true;
            state.stage = Stage::GameOver;
            debug!("target {} reached: {:?}", state.target, state.result());
        }
    }

    /// Reset for a new match. Valid from any stage.
    pub fn restart(&self, state: &mut GameState) {
        debug!("restart from stage {:?}", state.stage);
        state.reset();
    }

    /// Dispatch a command to the matching transition.
    pub fn apply(&self, state: &mut GameState, command: &Command) {
        match command {
            Command::ResolveToss { number, call } => self.resolve_toss(state, *number, *call),
            Command::ChooseRole(role) => self.choose_role(state, *role),
            Command::PlayBall { choice } => self.play_ball(state, *choice),
            Command::Restart => self.restart(state),
        }
    }
}
