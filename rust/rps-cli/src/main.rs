//! rps: host binary for the gesture game.
//!
//! Subcommands:
//! - stats
//! - history
//! - reset
//! - play
//! - features
//! - config

use std::env;
use std::path::PathBuf;
use std::process;

use rps_core::Config;
use rps_features::{build_vector, LandmarkObservation, NamedObservation};
use rps_session::{NoClassifier, Session};
use rps_store::AnalyticsStore;

/// Options every subcommand accepts.
#[derive(Default)]
struct CommonArgs {
    config: Option<PathBuf>,
    store: Option<PathBuf>,
}

impl CommonArgs {
    /// Consume `--config` / `--store` at `args[*i]`. Returns false if not a common option.
    fn take(&mut self, args: &[String], i: &mut usize) -> bool {
        let slot = match args[*i].as_str() {
            "--config" => &mut self.config,
            "--store" => &mut self.store,
            _ => return false,
        };
        *slot = Some(PathBuf::from(value_of(args, *i)));
        *i += 2;
        true
    }

    fn load_config(&self) -> Config {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path).unwrap_or_else(|e| {
                eprintln!("Failed to load config {}: {e}", path.display());
                process::exit(1);
            }),
            None => Config::default(),
        };
        if let Some(store) = &self.store {
            cfg.store.path = store.clone();
        }
        cfg
    }
}

fn value_of(args: &[String], i: usize) -> &str {
    if i + 1 >= args.len() {
        eprintln!("Missing value for {}", args[i]);
        process::exit(1);
    }
    &args[i + 1]
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> T {
    let v = value_of(args, i);
    v.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {v}", args[i]);
        process::exit(1);
    })
}

fn unknown_option(cmd: &str, other: &str) -> ! {
    eprintln!("Unknown option for `rps {cmd}`: {other}");
    eprintln!("Run `rps {cmd} --help` for usage.");
    process::exit(1);
}

const COMMON_HELP: &str = r#"    --config PATH    YAML config (default: built-in defaults)
    --store PATH     Override store.path from the config"#;

fn cmd_stats(args: &[String]) {
    let mut common = CommonArgs::default();
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("rps stats\n\nUSAGE:\n    rps stats [--json]\n\nOPTIONS:\n    --json           Print as JSON\n{COMMON_HELP}");
                return;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => unknown_option("stats", other),
        }
    }

    let cfg = common.load_config();
    let summary = AnalyticsStore::open(&cfg.store.path).summary();
    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode summary: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{summary}");
    }
}

fn cmd_history(args: &[String]) {
    let mut common = CommonArgs::default();
    let mut limit: Option<usize> = None;

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("rps history\n\nUSAGE:\n    rps history [--limit N]\n\nOPTIONS:\n    --limit N        Only the N most recent rounds\n{COMMON_HELP}");
                return;
            }
            "--limit" => {
                limit = Some(parse_value(args, i));
                i += 2;
            }
            other => unknown_option("history", other),
        }
    }

    let cfg = common.load_config();
    let store = AnalyticsStore::open(&cfg.store.path);
    let history = store.history();
    let skip = limit.map_or(0, |n| history.len().saturating_sub(n));
    for (idx, r) in history.iter().enumerate().skip(skip) {
        println!("{:>5}  {r}", idx + 1);
    }
}

fn cmd_reset(args: &[String]) {
    let mut common = CommonArgs::default();

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("rps reset\n\nUSAGE:\n    rps reset\n\nOPTIONS:\n{COMMON_HELP}");
                return;
            }
            other => unknown_option("reset", other),
        }
    }

    let cfg = common.load_config();
    let mut store = AnalyticsStore::open(&cfg.store.path);
    store.reset();
    if store.persist_failures() > 0 {
        eprintln!("Failed to write {}", cfg.store.path.display());
        process::exit(1);
    }
    println!("Scores reset.");
}

fn cmd_play(args: &[String]) {
    let mut common = CommonArgs::default();
    let mut label: Option<String> = None;
    let mut seed: Option<u64> = None;

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"rps play

USAGE:
    rps play --label LABEL [--seed S]

OPTIONS:
    --label LABEL    Gesture label produced by the classifier
    --seed S         Opponent RNG seed (overrides session.seed)
{COMMON_HELP}
"#
                );
                return;
            }
            "--label" => {
                label = Some(value_of(args, i).to_string());
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(args, i));
                i += 2;
            }
            other => unknown_option("play", other),
        }
    }

    let Some(label) = label else {
        eprintln!("Missing --label");
        process::exit(1);
    };

    let mut cfg = common.load_config();
    if seed.is_some() {
        cfg.session.seed = seed;
    }
    let mut session = Session::from_config(&cfg, NoClassifier);
    let report = session.play_label(&label);

    if let Some(r) = report.status.result() {
        println!("{r}");
    }
    println!(
        "Score: {:05}  Games: {:05}  High score: {}",
        report.current_score, report.games_played, report.high_score
    );
    if report.bonus_due {
        println!("Bonus round unlocked!");
    }
    if session.store().persist_failures() > 0 {
        eprintln!("Warning: failed to write {}", cfg.store.path.display());
    }
}

fn cmd_features(args: &[String]) {
    let mut common = CommonArgs::default();
    let mut landmarks: Option<PathBuf> = None;
    let mut threshold: Option<f32> = None;

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"rps features

USAGE:
    rps features --landmarks FILE [--threshold T]

OPTIONS:
    --landmarks FILE   JSON array of {{"joint", "x", "y", "confidence"}} objects
    --threshold T      Confidence threshold (overrides features.confidence_threshold)
{COMMON_HELP}
"#
                );
                return;
            }
            "--landmarks" => {
                landmarks = Some(PathBuf::from(value_of(args, i)));
                i += 2;
            }
            "--threshold" => {
                threshold = Some(parse_value(args, i));
                i += 2;
            }
            other => unknown_option("features", other),
        }
    }

    let Some(path) = landmarks else {
        eprintln!("Missing --landmarks");
        process::exit(1);
    };
    let cfg = common.load_config();
    let threshold = threshold.unwrap_or(cfg.features.confidence_threshold);

    let raw: Vec<NamedObservation> = std::fs::read(&path)
        .map_err(|e| e.to_string())
        .and_then(|b| serde_json::from_slice(&b).map_err(|e| e.to_string()))
        .unwrap_or_else(|e| {
            eprintln!("Failed to read landmarks {}: {e}", path.display());
            process::exit(1);
        });
    let obs: Vec<LandmarkObservation> = raw
        .iter()
        .filter_map(|o| {
            let r = o.resolve();
            if r.is_none() {
                tracing::debug!(joint = %o.joint, "ignoring joint outside the vocabulary");
            }
            r
        })
        .collect();

    let v = build_vector(&obs, threshold);
    match serde_json::to_string(&v.to_vec()) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode features: {e}");
            process::exit(1);
        }
    }
}

fn cmd_config(args: &[String]) {
    let mut common = CommonArgs::default();

    let mut i = 0usize;
    while i < args.len() {
        if common.take(args, &mut i) {
            continue;
        }
        match args[i].as_str() {
            "--help" | "-h" => {
                println!("rps config\n\nUSAGE:\n    rps config\n\nPrints the effective configuration as YAML.\n\nOPTIONS:\n{COMMON_HELP}");
                return;
            }
            other => unknown_option("config", other),
        }
    }

    let cfg = common.load_config();
    match cfg.to_yaml() {
        Ok(s) => print!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode config: {e}");
            process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!(
        r#"rps - gesture rock-paper-scissors host

USAGE:
    rps <COMMAND> [OPTIONS]

COMMANDS:
    stats       Print score summary (games, scores, streaks, favourite gesture)
    history     Print recorded rounds
    reset       Clear all recorded rounds and scores
    play        Adjudicate and record one round for a classifier label
    features    Encode a landmark file into the classifier feature vector
    config      Print the effective configuration

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `rps <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("rps {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    rps_logging::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        process::exit(1);
    }

    let rest = &args[2..];
    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "-V" | "--version" => print_version(),
        "stats" => cmd_stats(rest),
        "history" => cmd_history(rest),
        "reset" => cmd_reset(rest),
        "play" => cmd_play(rest),
        "features" => cmd_features(rest),
        "config" => cmd_config(rest),
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
            process::exit(1);
        }
    }
}
