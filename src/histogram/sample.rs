use anyhow::{anyhow, Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::debug;

/// File the loss histogram is drawn from, relative to the working directory.
pub const LOSS_FILE: &str = "compare_conflicted_timestamp_count_w_unconflicted.csv";

/// Zero-based field holding the percentage loss.
pub const LOSS_COLUMN: usize = 5;

/// Read the `column`-th comma-separated field of every line after the first
/// as an `f64`.
pub fn load_sample_series<P: AsRef<Path>>(path: P, column: usize) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_sample_series(file, column).with_context(|| format!("reading {}", path.display()))
}

/// Same as [`load_sample_series`] over any reader. The first line is skipped
/// without looking at it; any later line that is too short or whose field
/// is not a number fails the whole read.
pub fn read_sample_series<R: Read>(reader: R, column: usize) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate().skip(1) {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading line {}", lineno))?;

        let field = line.split(',').nth(column).ok_or_else(|| {
            anyhow!(
                "line {}: expected at least {} fields, found {}",
                lineno,
                column + 1,
                line.split(',').count()
            )
        })?;
        let value = field.trim().parse::<f64>().with_context(|| {
            format!("line {}: field {} `{}` is not a number", lineno, column, field)
        })?;
        samples.push(value);
    }

    debug!(samples = samples.len(), column, "read sample series");
    Ok(samples)
}
