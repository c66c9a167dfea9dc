//! rps-core: Gestures, round adjudication, score rules, and configuration.

pub mod config;
pub mod gesture;
pub mod opponent;
pub mod outcome;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use gesture::{resolve, Gesture, PLAYABLE};
pub use opponent::Opponent;
pub use outcome::{adjudicate, GameResult, RoundOutcome};
pub use scoring::{bonus_round_due, score_delta, POINTS_PER_ROUND};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod gesture_tests;
