use rps_core::{GameResult, Gesture, RoundOutcome};

use crate::ScoringRecord;

use Gesture::{Paper, Rock, Scissors, Unknown};

fn with_outcome(outcome: RoundOutcome) -> GameResult {
    GameResult::new(outcome, Rock, Scissors)
}

#[test]
fn win_then_lose_keeps_high_score() {
    let r = ScoringRecord::from_results([
        GameResult::play(Rock, Scissors),
        GameResult::play(Rock, Paper),
    ]);
    assert_eq!(r.current_score(), 0);
    assert_eq!(r.high_score(), 10);
    assert_eq!(r.games_played(), 2);
}

#[test]
fn high_score_tracks_running_maximum() {
    use RoundOutcome::*;
    let outcomes = [Lose, Lose, Win, Win, Win, Tie, Win, Lose, Lose, Lose, Lose];
    let r = ScoringRecord::from_results(outcomes.map(with_outcome));
    // -10 -20 -10 0 10 10 20 10 0 -10 -20
    assert_eq!(r.current_score(), -20);
    assert_eq!(r.high_score(), 20);
}

#[test]
fn high_score_never_negative() {
    let r = ScoringRecord::from_results([with_outcome(RoundOutcome::Lose)]);
    assert_eq!(r.current_score(), -10);
    assert_eq!(r.high_score(), 0);
}

#[test]
fn invalid_and_tie_rounds_do_not_score() {
    let r = ScoringRecord::from_results([
        GameResult::play(Unknown, Rock),
        GameResult::play(Paper, Paper),
    ]);
    assert_eq!(r.current_score(), 0);
    assert_eq!(r.high_score(), 0);
    assert_eq!(r.gesture_count(Unknown), 1);
    assert_eq!(r.gesture_count(Paper), 1);
}

#[test]
fn longest_streak_reference_history() {
    use RoundOutcome::*;
    let outcomes = [Win, Win, Lose, Win, Win, Win, Tie];
    let r = ScoringRecord::from_results(outcomes.map(with_outcome));
    assert_eq!(r.longest_streak(Win), 3);
    assert_eq!(r.longest_streak(Lose), 1);
    assert_eq!(r.longest_streak(Tie), 1);
    assert_eq!(r.longest_streak(InvalidInput), 0);
}

#[test]
fn longest_streak_empty_history() {
    let r = ScoringRecord::new();
    for o in RoundOutcome::ALL {
        assert_eq!(r.longest_streak(o), 0);
    }
}

#[test]
fn streak_at_end_of_history_counts() {
    use RoundOutcome::*;
    let r = ScoringRecord::from_results([Tie, Lose, Lose, Lose, Lose].map(with_outcome));
    assert_eq!(r.longest_streak(Lose), 4);
}

#[test]
fn most_common_gesture_basic() {
    assert_eq!(ScoringRecord::new().most_common_gesture(), None);

    let r = ScoringRecord::from_results([
        GameResult::play(Rock, Paper),
        GameResult::play(Rock, Rock),
        GameResult::play(Paper, Rock),
        GameResult::play(Rock, Scissors),
    ]);
    assert_eq!(r.most_common_gesture(), Some(Rock));
}

#[test]
fn most_common_gesture_ties_go_to_lowest_ordinal() {
    let r = ScoringRecord::from_results([
        GameResult::play(Scissors, Rock),
        GameResult::play(Paper, Rock),
    ]);
    assert_eq!(r.most_common_gesture(), Some(Paper));

    let r = ScoringRecord::from_results([
        GameResult::play(Unknown, Rock),
        GameResult::play(Scissors, Rock),
    ]);
    assert_eq!(r.most_common_gesture(), Some(Scissors));
}

#[test]
fn frequency_sums_to_history_length() {
    let r = ScoringRecord::from_results([
        GameResult::play(Rock, Paper),
        GameResult::play(Unknown, Paper),
        GameResult::play(Scissors, Paper),
        GameResult::play(Rock, Paper),
    ]);
    let total: u64 = r.gesture_frequency().values().sum();
    assert_eq!(total as usize, r.games_played());
    assert!(r.check_consistency().is_ok());
}

#[test]
fn clear_resets_everything() {
    let mut r = ScoringRecord::from_results([GameResult::play(Rock, Scissors)]);
    r.clear();
    assert_eq!(r, ScoringRecord::new());
}
