use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use rps_core::{GameResult, Gesture, RoundOutcome};
use rps_store::{load_record, save_record, AnalyticsStore, ScoringRecord};

fn random_results(rng: &mut ChaCha8Rng, n: usize) -> Vec<GameResult> {
    (0..n)
        .map(|_| {
            let user = Gesture::ALL[rng.gen_range(0..Gesture::ALL.len())];
            let opp = rps_core::PLAYABLE[rng.gen_range(0..3)];
            GameResult::play(user, opp)
        })
        .collect()
}

#[test]
fn load_store_roundtrip_random_histories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for n in [0usize, 1, 2, 7, 50, 300] {
        let results = random_results(&mut rng, n);
        let r = ScoringRecord::from_results(results.iter().copied());
        save_record(&path, &r).unwrap();
        let back = load_record(&path).unwrap();
        assert_eq!(back, r, "n={n}");
        assert_eq!(back.history(), results.as_slice());
    }
}

#[test]
fn store_file_matches_incremental_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("scores.json");
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let results = random_results(&mut rng, 120);

    let mut store = AnalyticsStore::open(&path);
    for &r in &results {
        store.record_round(r);
    }
    let expected = ScoringRecord::from_results(results.iter().copied());
    assert_eq!(store.record(), &expected);

    let reopened = AnalyticsStore::open(&path);
    assert_eq!(reopened.record(), &expected);
    assert_eq!(
        reopened.longest_streak(RoundOutcome::Win),
        expected.longest_streak(RoundOutcome::Win)
    );
    assert_eq!(reopened.most_common_gesture(), expected.most_common_gesture());
}

#[test]
fn three_rock_one_paper_reports_rock() {
    let mut store = AnalyticsStore::in_memory();
    assert_eq!(store.most_common_gesture(), None);
    for opp in [Gesture::Rock, Gesture::Paper, Gesture::Scissors] {
        store.record_round(GameResult::play(Gesture::Rock, opp));
    }
    store.record_round(GameResult::play(Gesture::Paper, Gesture::Rock));
    assert_eq!(store.most_common_gesture(), Some(Gesture::Rock));
}
