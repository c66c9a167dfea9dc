//! Single-owner round orchestrator.

use rps_core::{bonus_round_due, resolve, Config, GameResult, Opponent, RoundOutcome};
use rps_features::{build_vector, LandmarkObservation, FEATURE_SCHEMA_ID};
use rps_logging::{
    new_session_id, now_ms, NdjsonWriter, RoundEventV1, VersionInfoV1, ROUND_EVENT_VERSION,
};
use rps_store::{AnalyticsStore, STORE_SCHEMA_VERSION};
use tracing::{debug, info, warn};

use crate::classifier::GestureClassifier;

/// Per-session knobs taken from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub confidence_threshold: f32,
    pub bonus_every_points: u32,
    pub skip_empty_frames: bool,
}

impl From<&Config> for SessionOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            confidence_threshold: cfg.features.confidence_threshold,
            bonus_every_points: cfg.session.bonus_every_points,
            skip_empty_frames: cfg.session.skip_empty_frames,
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Round adjudicated and recorded.
    Played(GameResult),
    /// No landmarks in the frame; classifier not invoked.
    NoHand,
    /// Classifier returned an error; no label to play.
    NoLabel,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Played(_) => "played",
            Self::NoHand => "no_hand",
            Self::NoLabel => "no_label",
        }
    }

    pub fn result(&self) -> Option<&GameResult> {
        match self {
            Self::Played(r) => Some(r),
            _ => None,
        }
    }
}

/// What happened in one attempt, plus the scores after it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub round_idx: u64,
    pub status: RoundStatus,
    pub label: Option<String>,
    pub current_score: i64,
    pub high_score: i64,
    pub games_played: usize,
    /// The host should launch its bonus side-game. Only a winning round sets
    /// this; a tie or loss that leaves the score on a multiple does not, so
    /// the bonus never re-triggers without new points.
    pub bonus_due: bool,
}

/// Drives rounds one at a time and is the only owner of the analytics store.
pub struct Session<C> {
    session_id: String,
    store: AnalyticsStore,
    opponent: Opponent,
    classifier: C,
    opts: SessionOptions,
    events: Option<NdjsonWriter>,
    round_idx: u64,
}

impl<C: GestureClassifier> Session<C> {
    /// Build a session from config: opens the store, seeds the opponent, and
    /// opens the event log if one is configured.
    pub fn from_config(cfg: &Config, classifier: C) -> Self {
        let store = AnalyticsStore::open(&cfg.store.path);
        let opponent = Opponent::from_optional_seed(cfg.session.seed);
        let mut s = Self::new(store, opponent, classifier, SessionOptions::from(cfg));
        if let Some(path) = &cfg.logging.events_path {
            match NdjsonWriter::open_append_with_flush(path, cfg.logging.flush_every_lines) {
                Ok(w) => s.events = Some(w),
                Err(e) => warn!(path = %path.display(), error = %e, "event log disabled"),
            }
        }
        s
    }

    pub fn new(
        store: AnalyticsStore,
        opponent: Opponent,
        classifier: C,
        opts: SessionOptions,
    ) -> Self {
        let session_id = new_session_id();
        info!(
            session_id = %session_id,
            games = store.games_played(),
            score = store.current_score(),
            "session started"
        );
        Self {
            session_id,
            store,
            opponent,
            classifier,
            opts,
            events: None,
            round_idx: 0,
        }
    }

    /// Attach an event log (replacing any existing one).
    pub fn with_event_log(mut self, writer: NdjsonWriter) -> Self {
        self.events = Some(writer);
        self
    }

    /// Run one full round from a frame's landmarks.
    pub fn play_round(&mut self, observations: &[LandmarkObservation]) -> RoundReport {
        if observations.is_empty() && self.opts.skip_empty_frames {
            debug!("no hand in frame, skipping round");
            return self.finish(RoundStatus::NoHand, None, None, 0);
        }

        let features = build_vector(observations, self.opts.confidence_threshold);
        let classification = match self.classifier.classify(&features) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "classifier failed");
                return self.finish(RoundStatus::NoLabel, None, None, observations.len());
            }
        };

        let status = RoundStatus::Played(self.adjudicate_and_record(&classification.label));
        self.finish(
            status,
            Some(classification.label),
            classification.confidence,
            observations.len(),
        )
    }

    /// Run a round for a label the host already obtained from its classifier.
    /// Same as the tail of [`Session::play_round`]: an empty or unrecognized
    /// label is recorded as `invalid_input`.
    pub fn play_label(&mut self, label: &str) -> RoundReport {
        let status = RoundStatus::Played(self.adjudicate_and_record(label));
        self.finish(status, Some(label.to_string()), None, 0)
    }

    fn adjudicate_and_record(&mut self, label: &str) -> GameResult {
        let user = resolve(label);
        let opponent = self.opponent.draw();
        let result = GameResult::play(user, opponent);
        if !user.is_playable() {
            info!(label, "unrecognized gesture label");
        }
        self.store.record_round(result);
        result
    }

    fn finish(
        &mut self,
        status: RoundStatus,
        label: Option<String>,
        label_confidence: Option<f32>,
        observations: usize,
    ) -> RoundReport {
        let current_score = self.store.current_score();
        let bonus_due = matches!(status, RoundStatus::Played(r) if r.outcome() == RoundOutcome::Win)
            && bonus_round_due(current_score, self.opts.bonus_every_points);

        let report = RoundReport {
            round_idx: self.round_idx,
            status,
            label,
            current_score,
            high_score: self.store.high_score(),
            games_played: self.store.games_played(),
            bonus_due,
        };
        self.log_event(&report, label_confidence, observations);
        self.round_idx += 1;
        report
    }

    fn log_event(&mut self, report: &RoundReport, label_confidence: Option<f32>, observations: usize) {
        let Some(w) = self.events.as_mut() else {
            return;
        };
        let result = report.status.result();
        let ev = RoundEventV1 {
            event: "round",
            ts_ms: now_ms(),
            v: VersionInfoV1 {
                event_version: ROUND_EVENT_VERSION,
                feature_schema_id: FEATURE_SCHEMA_ID,
                store_schema_version: STORE_SCHEMA_VERSION,
            },
            session_id: self.session_id.clone(),
            round_idx: report.round_idx,
            status: report.status.as_str(),
            observations,
            label: report.label.clone(),
            label_confidence,
            user_gesture: result.map(|r| r.user_gesture().as_str()),
            opponent_gesture: result.map(|r| r.opponent_gesture().as_str()),
            outcome: result.map(|r| r.outcome().as_str()),
            current_score: report.current_score,
            high_score: report.high_score,
            games_played: report.games_played as u64,
            bonus_due: report.bonus_due,
        };
        if let Err(e) = w.write_event(&ev) {
            warn!(error = %e, "failed to write round event");
        }
    }

    /// Start a fresh scoring session (clears persisted history).
    pub fn reset_scores(&mut self) {
        self.store.reset();
    }

    pub fn store(&self) -> &AnalyticsStore {
        &self.store
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn into_store(self) -> AnalyticsStore {
        self.store
    }
}
