//! rps-logging: NDJSON round events + tracing setup.
//!
//! Round events are an append-only post-mortem log, one JSON object per line.
//! Diagnostics go through `tracing`; binaries call [`init_tracing`] once.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Round event schema version.
pub const ROUND_EVENT_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Session id derived from the wall clock and process id.
pub fn new_session_id() -> String {
    format!("{:x}-{}", now_ms(), std::process::id())
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

/// Layout versions stamped into every event.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfoV1 {
    pub event_version: u32,
    pub feature_schema_id: u32,
    pub store_schema_version: u32,
}

/// One attempted round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub session_id: String,
    pub round_idx: u64,

    /// "played" | "no_hand" | "no_label"
    pub status: &'static str,
    pub observations: usize,
    pub label: Option<String>,
    pub label_confidence: Option<f32>,

    pub user_gesture: Option<&'static str>,
    pub opponent_gesture: Option<&'static str>,
    pub outcome: Option<&'static str>,

    pub current_score: i64,
    pub high_score: i64,
    pub games_played: u64,
    pub bonus_due: bool,
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it (and its parent directory) if needed.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every parseable line, skipping blank and malformed ones (e.g. a
/// partial trailing line left by a crash).
pub fn read_ndjson_lenient<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, NdjsonError> {
    let f = File::open(path)?;
    let mut out = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(v) = serde_json::from_str::<T>(&line) {
            out.push(v);
        }
    }
    Ok(out)
}
