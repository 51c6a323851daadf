//! Histogram of per-user percentage loss from filtering timestamp collisions.
//!
//! Reads `compare_conflicted_timestamp_count_w_unconflicted.csv` from the
//! working directory unless told otherwise.

use anyhow::{Context, Result};
use clap::{builder::RangedU64ValueParser, Parser};
use conflict_report::histogram::{
    load_sample_series, render_histogram, Histogram, DEFAULT_BINS, LOSS_COLUMN, LOSS_FILE,
    LOSS_LABELS,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(about = "Histogram of data loss from filtering collisions")]
struct Args {
    /// CSV file to read
    #[arg(long, default_value = LOSS_FILE)]
    input: PathBuf,

    /// Zero-based field holding the percentage loss
    #[arg(long, default_value_t = LOSS_COLUMN)]
    column: usize,

    /// Number of equal-width bins
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    bins: usize,

    /// Return right after drawing instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

/// Hold the chart on screen until the viewer presses Enter.
fn wait_for_dismiss() -> Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }
    eprint!("press Enter to close ");
    io::stderr().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(input = %args.input.display(), column = args.column, "loading samples");

    let samples = load_sample_series(&args.input, args.column)?;
    let hist = Histogram::new(&samples, args.bins)
        .with_context(|| format!("binning {} samples", samples.len()))?;
    info!(samples = samples.len(), bins = hist.bins(), "histogram ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_histogram(&hist, &LOSS_LABELS, &mut out)?;
    out.flush()?;
    drop(out);

    if !args.no_wait {
        wait_for_dismiss()?;
    }
    Ok(())
}
