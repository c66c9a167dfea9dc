use std::cell::Cell;

use rps_core::{Gesture, Opponent, RoundOutcome};
use rps_features::{HandJoint, LandmarkObservation, FEATURE_LEN};
use rps_logging::{read_ndjson_lenient, NdjsonWriter};
use rps_store::AnalyticsStore;

use crate::{
    Classification, ClassifierError, FixedLabelClassifier, NoClassifier, RoundStatus, Session,
    SessionOptions,
};

fn hand() -> Vec<LandmarkObservation> {
    HandJoint::ALL
        .iter()
        .map(|&j| LandmarkObservation::new(j, 0.5, 0.5, 0.9))
        .collect()
}

fn session_vs<C: crate::GestureClassifier>(
    classifier: C,
    opponent_moves: &[Gesture],
) -> Session<C> {
    Session::new(
        AnalyticsStore::in_memory(),
        Opponent::scripted(opponent_moves.iter().copied()).unwrap(),
        classifier,
        SessionOptions::default(),
    )
}

#[test]
fn empty_frame_skips_classifier() {
    let calls = Cell::new(0u32);
    let clf = |_: &[f32]| -> Result<Classification, ClassifierError> {
        calls.set(calls.get() + 1);
        Ok(Classification::new("rock"))
    };
    let mut s = session_vs(clf, &[Gesture::Scissors]);

    let r = s.play_round(&[]);
    assert_eq!(r.status, RoundStatus::NoHand);
    assert_eq!(r.games_played, 0);
    assert_eq!(calls.get(), 0);
    assert_eq!(s.store().games_played(), 0);
}

#[test]
fn empty_frame_reaches_classifier_when_not_skipped() {
    let seen = Cell::new(None::<bool>);
    let clf = |f: &[f32]| -> Result<Classification, ClassifierError> {
        seen.set(Some(f.len() == FEATURE_LEN && f.iter().all(|&x| x == 0.0)));
        Ok(Classification::new("paper"))
    };
    let opts = SessionOptions {
        skip_empty_frames: false,
        ..SessionOptions::default()
    };
    let mut s = Session::new(
        AnalyticsStore::in_memory(),
        Opponent::scripted([Gesture::Rock]).unwrap(),
        clf,
        opts,
    );
    let r = s.play_round(&[]);
    assert_eq!(seen.get(), Some(true));
    assert_eq!(r.status.result().unwrap().outcome(), RoundOutcome::Win);
}

#[test]
fn classifier_failure_records_nothing() {
    let clf = |_: &[f32]| -> Result<Classification, ClassifierError> {
        Err(ClassifierError::Failed("model not loaded".to_string()))
    };
    let mut s = session_vs(clf, &[Gesture::Rock]);
    let r = s.play_round(&hand());
    assert_eq!(r.status, RoundStatus::NoLabel);
    assert_eq!(r.label, None);
    assert_eq!(s.store().games_played(), 0);
}

#[test]
fn empty_label_is_invalid_input_on_both_paths() {
    let mut s = session_vs(FixedLabelClassifier::new(""), &[Gesture::Rock]);

    let from_frame = s.play_round(&hand());
    let from_label = s.play_label("");
    for r in [&from_frame, &from_label] {
        let res = r.status.result().unwrap();
        assert_eq!(res.outcome(), RoundOutcome::InvalidInput);
        assert_eq!(res.user_gesture(), Gesture::Unknown);
        assert_eq!(r.label.as_deref(), Some(""));
        assert_eq!(r.current_score, 0);
    }
    assert_eq!(s.store().games_played(), 2);
    assert_eq!(s.store().gesture_count(Gesture::Unknown), 2);
}

#[test]
fn played_round_updates_store() {
    let mut s = session_vs(FixedLabelClassifier::new("Rock"), &[Gesture::Scissors, Gesture::Paper]);

    let r1 = s.play_round(&hand());
    let res = r1.status.result().copied().unwrap();
    assert_eq!(res.user_gesture(), Gesture::Rock);
    assert_eq!(res.opponent_gesture(), Gesture::Scissors);
    assert_eq!(res.outcome(), RoundOutcome::Win);
    assert_eq!(r1.label.as_deref(), Some("Rock"));
    assert_eq!((r1.current_score, r1.high_score, r1.games_played), (10, 10, 1));

    let r2 = s.play_round(&hand());
    assert_eq!(r2.status.result().unwrap().outcome(), RoundOutcome::Lose);
    assert_eq!((r2.current_score, r2.high_score, r2.games_played), (0, 10, 2));
    assert_eq!(r2.round_idx, 1);
}

#[test]
fn unrecognized_label_is_recorded_as_invalid_input() {
    let mut s = session_vs(FixedLabelClassifier::new("thumbs_up"), &[Gesture::Paper]);
    let r = s.play_round(&hand());
    let res = r.status.result().unwrap();
    assert_eq!(res.outcome(), RoundOutcome::InvalidInput);
    assert_eq!(res.user_gesture(), Gesture::Unknown);
    assert_eq!(r.current_score, 0);
    assert_eq!(s.store().gesture_count(Gesture::Unknown), 1);
}

#[test]
fn bonus_due_on_winning_to_multiple() {
    let mut s = session_vs(FixedLabelClassifier::new("paper"), &[Gesture::Rock]);
    assert!(!s.play_round(&hand()).bonus_due); // 10
    assert!(s.play_round(&hand()).bonus_due); // 20
    assert!(!s.play_round(&hand()).bonus_due); // 30
    assert!(s.play_round(&hand()).bonus_due); // 40
}

#[test]
fn bonus_not_signalled_on_loss_or_tie() {
    let mut s = session_vs(
        FixedLabelClassifier::new("paper"),
        &[Gesture::Rock, Gesture::Rock, Gesture::Rock, Gesture::Scissors, Gesture::Paper],
    );
    for _ in 0..3 {
        s.play_round(&hand());
    }
    // 30 -> 20 by losing.
    let lose = s.play_round(&hand());
    assert_eq!(lose.current_score, 20);
    assert!(!lose.bonus_due);
    // Still 20 after a tie.
    let tie = s.play_round(&hand());
    assert_eq!(tie.current_score, 20);
    assert!(!tie.bonus_due);
}

#[test]
fn play_label_bypasses_features() {
    let mut s = session_vs(NoClassifier, &[Gesture::Paper]);
    let r = s.play_label("SCISSORS");
    assert_eq!(r.status.result().unwrap().outcome(), RoundOutcome::Win);
}

#[test]
fn no_classifier_never_records_frames() {
    let mut s = session_vs(NoClassifier, &[Gesture::Paper]);
    assert_eq!(s.play_round(&hand()).status, RoundStatus::NoLabel);
    assert_eq!(s.store().games_played(), 0);
}

#[test]
fn event_log_records_each_attempt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("rounds.ndjson");
    let clf = |_: &[f32]| -> Result<Classification, ClassifierError> {
        Ok(Classification::new("rock").with_confidence(0.75))
    };
    let mut s = session_vs(clf, &[Gesture::Scissors])
        .with_event_log(NdjsonWriter::open_append(&path).unwrap());

    s.play_round(&hand());
    s.play_round(&[]);
    let session_id = s.session_id().to_string();
    drop(s);

    let events: Vec<serde_json::Value> = read_ndjson_lenient(&path).unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["session_id"] == session_id.as_str()));

    let played = &events[0];
    assert_eq!(played["status"], "played");
    assert_eq!(played["round_idx"], 0);
    assert_eq!(played["label"], "rock");
    assert_eq!(played["label_confidence"], 0.75);
    assert_eq!(played["outcome"], "win");
    assert_eq!(played["observations"], 21);
    assert_eq!(played["current_score"], 10);

    let skipped = &events[1];
    assert_eq!(skipped["status"], "no_hand");
    assert_eq!(skipped["round_idx"], 1);
    assert!(skipped["label_confidence"].is_null());
    assert!(skipped["outcome"].is_null());
}

#[test]
fn fixed_classifier_rejects_wrong_length() {
    use crate::GestureClassifier;
    let c = FixedLabelClassifier::new("rock");
    assert!(matches!(
        c.classify(&[0.0; 3]),
        Err(ClassifierError::BadInput { got: 3, .. })
    ));
    assert_eq!(c.classify(&[0.0; FEATURE_LEN]).unwrap().label, "rock");
}

#[test]
fn reset_scores_clears_store() {
    let mut s = session_vs(FixedLabelClassifier::new("rock"), &[Gesture::Scissors]);
    s.play_round(&hand());
    s.reset_scores();
    assert_eq!(s.store().games_played(), 0);
    assert_eq!(s.store().high_score(), 0);
}
