//! Train command implementation.

use clap::Args;
use std::path::PathBuf;

/// Train command arguments.
#[derive(Args, Debug)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum frequency for merges
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    pub min_frequency: u64,

    /// Write the learned merges as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub merges_out: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use bytepair_training::{BpeTrainer, TrainingConfig, TrainingOutcome};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let data = fs::read(&cmd.input)
        .with_context(|| format!("failed to read {}", cmd.input.display()))?;
    info!("read {} bytes from {}", data.len(), cmd.input.display());

    let config = TrainingConfig::builder()
        .min_frequency(cmd.min_frequency)
        .build()?;

    let start = Instant::now();
    let outcome = BpeTrainer::new(config, &data)?.into_outcome();
    info!(
        "training complete: merges={} tokens={} duration={:.2?}",
        outcome.merge_count(),
        outcome.token_count(),
        start.elapsed()
    );

    if let Some(path) = &cmd.merges_out {
        outcome
            .history
            .save(path)
            .with_context(|| format!("failed to save merges to {}", path.display()))?;
        info!("wrote {} merges to {}", outcome.merge_count(), path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &outcome)?;
    out.flush()?;

    Ok(())
}

/// Write the training summary followed by the decoded bytes.
///
/// Decoding happens before anything is written, so a corrupt history never
/// produces a partial report.
pub fn write_report<W: Write>(out: &mut W, outcome: &TrainingOutcome) -> AnyhowResult<()> {
    let decoded = outcome
        .decode()
        .context("failed to decode trained sequence")?;

    writeln!(out, "Final token count: {}", outcome.token_count())?;
    writeln!(out, "Vocab size: {}", outcome.vocab_size())?;
    writeln!(out, "Merges: {}", outcome.merge_count())?;
    out.write_all(&decoded)?;
    writeln!(out)?;

    Ok(())
}
