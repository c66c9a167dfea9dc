//! Canonical gestures and label resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical gesture.
///
/// Variant order is significant: it is the ordinal used to break ties in
/// frequency queries (lowest ordinal wins) and the key order of persisted maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// Classifier output that could not be mapped to a playable gesture.
    Unknown,
}

/// Gestures an opponent may throw. `Unknown` is never drawn.
pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

impl Gesture {
    /// All gestures in ordinal order.
    pub const ALL: [Gesture; 4] = [
        Gesture::Rock,
        Gesture::Paper,
        Gesture::Scissors,
        Gesture::Unknown,
    ];

    /// Lowercase tag, identical to the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Unknown => "unknown",
        }
    }

    /// Hand glyph shown to players.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Rock => "✊",
            Self::Paper => "✋",
            Self::Scissors => "✌️",
            Self::Unknown => "❓",
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The gesture this one defeats (rock > scissors > paper > rock).
    pub fn beats(&self) -> Option<Gesture> {
        match self {
            Self::Rock => Some(Self::Scissors),
            Self::Scissors => Some(Self::Paper),
            Self::Paper => Some(Self::Rock),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw classifier label to a canonical gesture.
///
/// Matching is ASCII case-insensitive and exact otherwise (no trimming). Any
/// other input, including the empty string, resolves to [`Gesture::Unknown`].
pub fn resolve(label: &str) -> Gesture {
    PLAYABLE
        .into_iter()
        .find(|g| label.eq_ignore_ascii_case(g.as_str()))
        .unwrap_or(Gesture::Unknown)
}
