mod cli;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::warn;

use sorting_visualizer::common::logging::{LogTarget, init_logging};
use sorting_visualizer::common::runner::{run_interactive, run_plain};
use sorting_visualizer::common::{Algorithm, Settings, StartOutcome, write_back};

/// Entry point: parse arguments, set up logging and settings, then run either
/// the interactive panels or a single plain-text sort.
fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let target = if cli.plain {
        LogTarget::Stderr
    } else {
        cli.log_file.clone().map(LogTarget::File).unwrap_or(LogTarget::Off)
    };
    if let Err(e) = init_logging(cli.log_level.as_deref(), cli.log_format.as_deref(), target) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let stored = match Settings::load(&cli.settings) {
        Ok(settings) => Some(settings),
        Err(error) => {
            warn!(%error, path = %cli.settings.display(), "Ignoring unreadable settings file");
            None
        }
    };
    let mut settings = stored.clone().unwrap_or_default();
    cli.apply(&mut settings);
    settings.validate().context("Invalid settings")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let algorithm = cli
        .algorithm
        .or(settings.last_algorithm)
        .unwrap_or(Algorithm::Selection);

    let last_algorithm = if cli.plain {
        let stdout = std::io::stdout().lock();
        let (outcome, mut out) = run_plain(&settings, algorithm, cli.values.clone(), &mut rng, stdout)
            .context("Plain run failed")?;
        if let StartOutcome::Completed(stats) = outcome {
            writeln!(
                out,
                "{}: {} highlights, {} swaps, {} writes",
                algorithm, stats.highlights, stats.swaps, stats.writes
            )?;
        }
        Some(algorithm)
    } else {
        run_interactive(&settings, algorithm, &mut rng).context("Interactive session failed")?
    };

    write_back(&cli.settings, stored, &settings, cli.save, last_algorithm)
        .context("Failed to save settings")?;

    Ok(())
}
