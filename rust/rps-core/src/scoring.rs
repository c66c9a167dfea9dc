//! Score rules.

use crate::outcome::RoundOutcome;

/// Points gained on a win and lost on a loss.
pub const POINTS_PER_ROUND: i64 = 10;

/// Score change for one round: +10 win, -10 loss, 0 otherwise.
pub fn score_delta(outcome: RoundOutcome) -> i64 {
    match outcome {
        RoundOutcome::Win => POINTS_PER_ROUND,
        RoundOutcome::Lose => -POINTS_PER_ROUND,
        RoundOutcome::Tie | RoundOutcome::InvalidInput => 0,
    }
}

/// Whether the host should launch its bonus side-game at this score.
///
/// True on every positive multiple of `every`. `every == 0` disables the bonus.
pub fn bonus_round_due(score: i64, every: u32) -> bool {
    if every == 0 {
        return false;
    }
    let every = i64::from(every);
    score >= every && score % every == 0
}
