use clap::Parser;
use std::path::PathBuf;

use sorting_visualizer::common::{Algorithm, SETTINGS_FILE, Settings};

/// Animate classic sorting algorithms as terminal bar charts.
#[derive(Parser, Debug)]
#[command(name = "sorting_visualizer", version, about)]
pub struct Cli {
    /// Algorithm to open (interactive) or run (plain)
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Pause between steps in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Number of elements in generated arrays
    #[arg(long)]
    pub len: Option<usize>,

    /// Seed for reproducible arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print one text line per step instead of drawing the interactive chart
    #[arg(long)]
    pub plain: bool,

    /// Explicit array to sort, comma separated (plain mode only)
    #[arg(long, value_delimiter = ',', requires = "plain")]
    pub values: Option<Vec<u32>>,

    /// Log level (trace|debug|info|warn|error|off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (compact|pretty|json)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to this file in interactive mode
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Settings file to read
    #[arg(long, default_value = SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Persist the effective settings after the run
    #[arg(long)]
    pub save: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(len) = self.len {
            settings.array_len = len;
        }
    }
}
