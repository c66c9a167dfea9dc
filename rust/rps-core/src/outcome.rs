//! Round adjudication.
//!
//! Only the user side can be unrecognized: opponents draw from [`crate::PLAYABLE`].
//! A round whose user gesture is `Unknown` is `InvalidInput` regardless of the
//! opponent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gesture::Gesture;

/// Outcome of one round from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Win,
    Lose,
    Tie,
    InvalidInput,
}

impl RoundOutcome {
    pub const ALL: [RoundOutcome; 4] = [
        RoundOutcome::Win,
        RoundOutcome::Lose,
        RoundOutcome::Tie,
        RoundOutcome::InvalidInput,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Tie => "tie",
            Self::InvalidInput => "invalid_input",
        }
    }

    /// Result banner shown after a round.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Win => "You Win!",
            Self::Lose => "You Lose!",
            Self::Tie => "You Tied",
            Self::InvalidInput => "Invalid Input",
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide a round. Total and deterministic.
///
/// - user `Unknown` -> `InvalidInput`
/// - equal gestures -> `Tie`
/// - otherwise rock beats scissors, scissors beats paper, paper beats rock.
///
/// An `Unknown` opponent cannot come out of [`crate::Opponent`]; if a caller
/// passes one anyway the round is decided as a user win, since the user threw
/// a valid gesture against no valid gesture.
pub fn adjudicate(user: Gesture, opponent: Gesture) -> RoundOutcome {
    if !user.is_playable() {
        return RoundOutcome::InvalidInput;
    }
    if user == opponent {
        return RoundOutcome::Tie;
    }
    match user.beats() {
        Some(beaten) if beaten == opponent => RoundOutcome::Win,
        _ if !opponent.is_playable() => RoundOutcome::Win,
        _ => RoundOutcome::Lose,
    }
}

/// One adjudicated round. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    outcome: RoundOutcome,
    user_gesture: Gesture,
    opponent_gesture: Gesture,
}

impl GameResult {
    /// Adjudicate `user` vs `opponent` and capture the result.
    pub fn play(user: Gesture, opponent: Gesture) -> Self {
        Self {
            outcome: adjudicate(user, opponent),
            user_gesture: user,
            opponent_gesture: opponent,
        }
    }

    /// Build a result with an explicit outcome (e.g. when replaying history).
    pub fn new(outcome: RoundOutcome, user_gesture: Gesture, opponent_gesture: Gesture) -> Self {
        Self {
            outcome,
            user_gesture,
            opponent_gesture,
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn user_gesture(&self) -> Gesture {
        self.user_gesture
    }

    pub fn opponent_gesture(&self) -> Gesture {
        self.opponent_gesture
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (you: {} {}, opponent: {} {})",
            self.outcome.headline(),
            self.user_gesture.glyph(),
            self.user_gesture,
            self.opponent_gesture.glyph(),
            self.opponent_gesture
        )
    }
}
