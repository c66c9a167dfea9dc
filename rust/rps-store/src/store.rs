//! Durable analytics store.
//!
//! The store owns the only mutable [`ScoringRecord`] of a session. Every
//! mutation is flushed synchronously via write-to-tmp + rename, so a crash
//! loses at most the round being recorded. Callers must serialize access:
//! the store does no locking of its own.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rps_core::{GameResult, Gesture, RoundOutcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::record::{RecordParts, ScoringRecord, STORE_SCHEMA_VERSION};
use crate::summary::ScoreSummary;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported schema_version {0} (expected {STORE_SCHEMA_VERSION})")]
    UnsupportedSchema(u32),
    #[error("inconsistent record: {0}")]
    Inconsistent(&'static str),
    #[error("invalid store path: {0}")]
    InvalidPath(PathBuf),
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    schema_version: u32,
    #[serde(flatten)]
    record: &'a ScoringRecord,
}

#[derive(Deserialize)]
struct StoreFile {
    schema_version: u32,
    #[serde(flatten)]
    record: RecordParts,
}

fn tmp_path(path: &Path) -> Result<PathBuf, StoreError> {
    let name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidPath(path.to_path_buf()))?;
    let mut tmp = OsString::from(name);
    tmp.push(".tmp");
    Ok(path.with_file_name(tmp))
}

/// Read and validate a persisted record.
pub fn load_record(path: impl AsRef<Path>) -> Result<ScoringRecord, StoreError> {
    let bytes = fs::read(path)?;
    let file: StoreFile = serde_json::from_slice(&bytes)?;
    if file.schema_version != STORE_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema(file.schema_version));
    }
    file.record.into_record().map_err(StoreError::Inconsistent)
}

/// Write a record atomically (tmp file + rename). Creates the parent directory.
pub fn save_record(path: impl AsRef<Path>, record: &ScoringRecord) -> Result<(), StoreError> {
    let path = path.as_ref();
    let tmp = tmp_path(path)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = StoreFileRef {
        schema_version: STORE_SCHEMA_VERSION,
        record,
    };
    fs::write(&tmp, serde_json::to_vec_pretty(&file)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Remove a tmp file left behind by a crash during [`save_record`].
pub fn cleanup_tmp_file(path: &Path) -> Result<(), StoreError> {
    let tmp = tmp_path(path)?;
    if tmp.exists() {
        fs::remove_file(&tmp)?;
    }
    Ok(())
}

/// Owner of the session's scoring record.
#[derive(Debug)]
pub struct AnalyticsStore {
    path: Option<PathBuf>,
    record: ScoringRecord,
    persist_failures: u64,
}

impl AnalyticsStore {
    /// Open the store at `path`.
    ///
    /// A missing, unreadable, or corrupt file yields an empty record; this
    /// never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Err(e) = cleanup_tmp_file(&path) {
            warn!(path = %path.display(), error = %e, "failed to remove stale tmp file");
        }
        let record = match load_record(&path) {
            Ok(r) => {
                info!(
                    path = %path.display(),
                    games = r.games_played(),
                    high_score = r.high_score(),
                    "loaded scoring record"
                );
                r
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no scoring record yet, starting fresh");
                ScoringRecord::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "scoring record unusable, starting fresh");
                ScoringRecord::new()
            }
        };
        Self {
            path: Some(path),
            record,
            persist_failures: 0,
        }
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            record: ScoringRecord::new(),
            persist_failures: 0,
        }
    }

    /// Append a round, update score/high score/frequency, and persist.
    ///
    /// Persistence failures are logged and counted; the in-memory record stays
    /// authoritative.
    pub fn record_round(&mut self, result: GameResult) {
        self.record.push(result);
        debug!(
            outcome = %result.outcome(),
            user = %result.user_gesture(),
            opponent = %result.opponent_gesture(),
            score = self.record.current_score(),
            "recorded round"
        );
        self.persist();
    }

    /// Clear history, frequencies, and both scores, then persist.
    pub fn reset(&mut self) {
        self.record.clear();
        info!("scoring record reset");
        self.persist();
    }

    fn persist(&mut self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = save_record(path, &self.record) {
            self.persist_failures += 1;
            warn!(
                path = %path.display(),
                error = %e,
                failures = self.persist_failures,
                "failed to persist scoring record"
            );
        }
    }

    pub fn longest_streak(&self, outcome: RoundOutcome) -> usize {
        self.record.longest_streak(outcome)
    }

    pub fn most_common_gesture(&self) -> Option<Gesture> {
        self.record.most_common_gesture()
    }

    pub fn current_score(&self) -> i64 {
        self.record.current_score()
    }

    pub fn high_score(&self) -> i64 {
        self.record.high_score()
    }

    pub fn games_played(&self) -> usize {
        self.record.games_played()
    }

    pub fn gesture_count(&self, g: Gesture) -> u64 {
        self.record.gesture_count(g)
    }

    /// Recorded rounds, oldest first.
    pub fn history(&self) -> &[GameResult] {
        self.record.history()
    }

    pub fn record(&self) -> &ScoringRecord {
        &self.record
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of failed writes since the store was opened.
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_record(&self.record)
    }
}
