//! Score history report.

use std::fmt;

use rps_core::{Gesture, RoundOutcome};
use serde::Serialize;

use crate::record::ScoringRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub games_played: usize,
    pub high_score: i64,
    pub current_score: i64,
    pub longest_win_streak: usize,
    pub longest_lose_streak: usize,
    pub longest_tie_streak: usize,
    pub most_common_gesture: Option<Gesture>,
}

impl ScoreSummary {
    pub fn from_record(r: &ScoringRecord) -> Self {
        Self {
            games_played: r.games_played(),
            high_score: r.high_score(),
            current_score: r.current_score(),
            longest_win_streak: r.longest_streak(RoundOutcome::Win),
            longest_lose_streak: r.longest_streak(RoundOutcome::Lose),
            longest_tie_streak: r.longest_streak(RoundOutcome::Tie),
            most_common_gesture: r.most_common_gesture(),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Games Played", self.games_played.to_string()),
            ("High Score", self.high_score.to_string()),
            ("Current Session Score", self.current_score.to_string()),
            ("Longest Winning Streak", self.longest_win_streak.to_string()),
            ("Longest Losing Streak", self.longest_lose_streak.to_string()),
            ("Longest Tie Streak", self.longest_tie_streak.to_string()),
            (
                "Most Common Gesture",
                match self.most_common_gesture {
                    Some(g) => format!("{} {}", g.glyph(), g),
                    None => "None".to_string(),
                },
            ),
        ]
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
