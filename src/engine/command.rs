//! Match inputs as data.
//!
//! Inputs are plain serializable values rather than UI callbacks: the
//! rendering layer builds a `Command` from whatever was pressed and hands
//! it to `GameEngine::apply`. A recorded command sequence replays a match.

use serde::{Deserialize, Serialize};

/// The user's even/odd call at the toss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TossCall {
    Even,
    Odd,
}

impl TossCall {
    /// Parity of a toss total.
    ///
    /// ```
    /// use hand_cricket::engine::TossCall;
    ///
    /// assert_eq!(TossCall::of_total(6), TossCall::Even);
    /// assert_eq!(TossCall::of_total(7), TossCall::Odd);
    /// ```
    #[must_use]
    pub fn of_total(total: u32) -> Self {
        if total % 2 == 0 {
            TossCall::Even
        } else {
            TossCall::Odd
        }
    }
}

impl std::fmt::Display for TossCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TossCall::Even => write!(f, "even"),
            TossCall::Odd => write!(f, "odd"),
        }
    }
}

/// The role the toss winner picks for the first innings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Bat,
    Bowl,
}

/// A complete match input.
///
/// Each stage accepts one or two of these; `Restart` is accepted from
/// any stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// The user's toss number plus the even/odd call.
    ResolveToss { number: u8, call: TossCall },
    /// Bat or bowl, after winning the toss.
    ChooseRole(Role),
    /// One ball with the user's number.
    PlayBall { choice: u8 },
    /// Reset everything for a new match.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert_eq!(TossCall::of_total(2), TossCall::Even);
        assert_eq!(TossCall::of_total(3), TossCall::Odd);
        assert_eq!(TossCall::of_total(12), TossCall::Even);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TossCall::Even), "even");
        assert_eq!(format!("{}", TossCall::Odd), "odd");
    }

    #[test]
    fn test_command_serde() {
        let commands = vec![
            Command::ResolveToss {
                number: 3,
                call: TossCall::Even,
            },
            Command::ChooseRole(Role::Bat),
            Command::PlayBall { choice: 6 },
            Command::Restart,
        ];

        let json = serde_json::to_string(&commands).unwrap();
        let decoded: Vec<Command> = serde_json::from_str(&json).unwrap();
        assert_eq!(commands, decoded);
    }
}
