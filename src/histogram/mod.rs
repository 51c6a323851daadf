// src/histogram/mod.rs

pub mod render;
pub mod sample;

pub use render::{render_histogram, Labels, LOSS_LABELS};
pub use sample::{load_sample_series, read_sample_series, LOSS_COLUMN, LOSS_FILE};

use anyhow::{bail, Result};

pub const DEFAULT_BINS: usize = 10;

/// Equal-width bin counts over a sample series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Count `values` into `bins` equal-width bins spanning their range.
    ///
    /// Every bin is half-open `[lo, hi)` except the last, which also takes
    /// the maximum. A series with a single distinct value is centred in a
    /// range of width 1; an empty series spans `[0, 1]`.
    pub fn new(values: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            bail!("histogram needs at least one bin");
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite()) {
            bail!("cannot bin non-finite value {}", v);
        }

        let (lo, hi) = match range(values) {
            None => (0.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
            Some(r) => r,
        };

        if !(hi - lo).is_finite() {
            bail!("value range [{}, {}] is too wide to bin", lo, hi);
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins)
            .map(|i| match i {
                0 => lo,
                i if i == bins => hi,
                i => lo + width * i as f64,
            })
            .collect();

        let mut counts = vec![0u64; bins];
        for &v in values {
            counts[bin_index(&edges, v)] += 1;
        }

        Ok(Histogram { edges, counts })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(lo, hi, count)` for each bin.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(e, &c)| (e[0], e[1], c))
    }
}

fn range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Bin for `v`, which must lie within the outer edges.
fn bin_index(edges: &[f64], v: f64) -> usize {
    let last = edges.len() - 2;
    let lo = edges[0];
    let width = (edges[last + 1] - lo) / (last + 1) as f64;
    let mut idx = (((v - lo) / width).floor().max(0.0) as usize).min(last);
    // floating-point drift can land one bin off near an edge
    if idx > 0 && v < edges[idx] {
        idx -= 1;
    } else if idx < last && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}
