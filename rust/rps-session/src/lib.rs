//! rps-session: Round orchestration around an external gesture classifier.
//!
//! Pipeline per round: landmarks -> feature vector -> classifier -> canonical
//! gesture -> adjudication against a drawn opponent -> analytics store.

pub mod classifier;
pub mod session;

pub use classifier::{
    Classification, ClassifierError, FixedLabelClassifier, GestureClassifier, NoClassifier,
};
pub use session::{RoundReport, RoundStatus, Session, SessionOptions};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod session_tests;
