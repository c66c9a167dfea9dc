//! Persisted scoring aggregate.

use std::collections::BTreeMap;

use rps_core::{score_delta, GameResult, Gesture, RoundOutcome};
use serde::{Deserialize, Serialize};

/// On-disk layout version of the scoring record.
pub const STORE_SCHEMA_VERSION: u32 = 1;

/// Round history plus the aggregates derived from it.
///
/// Invariants:
/// - `history` is append-only and chronological.
/// - `gesture_frequency[g]` is the number of rounds whose user gesture is `g`;
///   counts sum to `history.len()`.
/// - `current_score` is the sum of the history's score deltas.
/// - `high_score` is the maximum `current_score` ever reached (never below 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoringRecord {
    history: Vec<GameResult>,
    gesture_frequency: BTreeMap<Gesture, u64>,
    high_score: i64,
    current_score: i64,
}

/// Record fields as read from disk, before validation.
///
/// Files written before `current_score` was persisted omit it; it is then
/// recomputed from the history.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordParts {
    history: Vec<GameResult>,
    gesture_frequency: BTreeMap<Gesture, u64>,
    high_score: i64,
    #[serde(default)]
    current_score: Option<i64>,
}

impl RecordParts {
    pub(crate) fn into_record(self) -> Result<ScoringRecord, &'static str> {
        let replayed = ScoringRecord::from_results(self.history.iter().copied());
        let record = ScoringRecord {
            history: self.history,
            gesture_frequency: self.gesture_frequency,
            high_score: self.high_score,
            current_score: self.current_score.unwrap_or(replayed.current_score),
        };
        record.check_consistency()?;
        Ok(record)
    }
}

impl ScoringRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record by replaying `results` in order.
    pub fn from_results<I: IntoIterator<Item = GameResult>>(results: I) -> Self {
        let mut r = Self::new();
        for res in results {
            r.push(res);
        }
        r
    }

    /// Append one round and update every aggregate.
    pub(crate) fn push(&mut self, result: GameResult) {
        self.history.push(result);
        *self
            .gesture_frequency
            .entry(result.user_gesture())
            .or_insert(0) += 1;
        self.current_score += score_delta(result.outcome());
        self.high_score = self.high_score.max(self.current_score);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn history(&self) -> &[GameResult] {
        &self.history
    }

    pub fn gesture_frequency(&self) -> &BTreeMap<Gesture, u64> {
        &self.gesture_frequency
    }

    pub fn gesture_count(&self, g: Gesture) -> u64 {
        self.gesture_frequency.get(&g).copied().unwrap_or(0)
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    pub fn games_played(&self) -> usize {
        self.history.len()
    }

    /// Longest run of consecutive rounds with `outcome`, in chronological order.
    pub fn longest_streak(&self, outcome: RoundOutcome) -> usize {
        let mut best = 0usize;
        let mut run = 0usize;
        for r in &self.history {
            if r.outcome() == outcome {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    /// Gesture with the highest count; ties go to the lowest ordinal
    /// (rock < paper < scissors < unknown). `None` when nothing was recorded.
    pub fn most_common_gesture(&self) -> Option<Gesture> {
        let mut best: Option<(Gesture, u64)> = None;
        for g in Gesture::ALL {
            let n = self.gesture_count(g);
            if n == 0 {
                continue;
            }
            match best {
                Some((_, m)) if m >= n => {}
                _ => best = Some((g, n)),
            }
        }
        best.map(|(g, _)| g)
    }

    /// Check the aggregate invariants against the history.
    pub fn check_consistency(&self) -> Result<(), &'static str> {
        let mut counts: BTreeMap<Gesture, u64> = BTreeMap::new();
        for r in &self.history {
            *counts.entry(r.user_gesture()).or_insert(0) += 1;
        }
        let stored: BTreeMap<Gesture, u64> = self
            .gesture_frequency
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(&g, &n)| (g, n))
            .collect();
        if stored != counts {
            return Err("gesture_frequency does not match history");
        }
        let mut score = 0i64;
        let mut high = 0i64;
        for r in &self.history {
            score += score_delta(r.outcome());
            high = high.max(score);
        }
        if self.current_score != score {
            return Err("current_score does not match history");
        }
        if self.high_score != high {
            return Err("high_score does not match history");
        }
        Ok(())
    }
}
