//! Logging setup built on `tracing-subscriber`.
//!
//! The interactive mode owns the terminal, so its logs either go to a file or
//! nowhere. The plain trace mode logs to stderr and keeps stdout for frames.
//!
//! Level resolution: explicit argument, then `SORT_VISUALIZER_LOG`, then
//! `RUST_LOG`, then `info`.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::common::error::{Result, VisualizerError};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format: {} (expected one of {})",
                s,
                LogFormat::variants().join(", ")
            )),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

/// Resolves the level filter string from the argument or the environment.
pub fn resolve_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SORT_VISUALIZER_LOG").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global subscriber.
///
/// Fails if the format is unknown, the log file cannot be created, or a
/// subscriber is already installed.
pub fn init_logging(level: Option<&str>, format: Option<&str>, target: LogTarget) -> Result<()> {
    let format = match format {
        Some(name) => LogFormat::from_str(name).map_err(VisualizerError::logging)?,
        None => LogFormat::Compact,
    };

    let log_level = resolve_level(level);
    let filter = if matches!(target, LogTarget::Off) || log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let (writer, ansi) = match &target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Off => (BoxMakeWriter::new(std::io::sink), false),
    };

    let registry = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Compact => registry
            .with(
                fmt::Layer::default()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(false)
                    .with_level(true)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::Layer::default()
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::Layer::default()
                    .with_writer(writer)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| VisualizerError::logging(e.to_string()))
}
