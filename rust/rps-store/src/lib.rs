//! rps-store: Scoring record, persistence, and session analytics.

pub mod record;
pub mod store;
pub mod summary;

pub use record::{ScoringRecord, STORE_SCHEMA_VERSION};
pub use store::{cleanup_tmp_file, load_record, save_record, AnalyticsStore, StoreError};
pub use summary::ScoreSummary;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod record_tests;
