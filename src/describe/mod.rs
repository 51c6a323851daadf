// src/describe/mod.rs

//! Per-column descriptive statistics over a [`Dataset`].

pub mod kind;
pub mod quantile;
pub mod table;

pub use kind::{infer_kind, parse_number, ColumnKind};
pub use quantile::quantile;
pub use table::{render_summary, write_summary};

use anyhow::Result;
use std::{io::Write, path::Path};
use tracing::{debug, info};

use crate::dataset::{self, is_missing, Dataset};

/// Row labels of the summary table, top to bottom.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Descriptive statistics of one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Non-missing cells.
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn undefined(name: &str, kind: ColumnKind, count: usize) -> Self {
        ColumnSummary {
            name: name.to_string(),
            kind,
            count,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Summarise a column from its raw cells.
    pub fn from_cells<'a, I>(name: &str, cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        let kind = infer_kind(name, cells.clone());
        let present: Vec<&str> = cells.into_iter().filter(|c| !is_missing(c)).collect();

        if kind == ColumnKind::Text || present.is_empty() {
            return Self::undefined(name, kind, present.len());
        }

        let mut values: Vec<f64> = present
            .iter()
            .filter_map(|c| parse_number(c))
            .collect();
        values.sort_by(f64::total_cmp);

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let std = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        ColumnSummary {
            name: name.to_string(),
            kind,
            count: n,
            mean,
            std,
            min: values[0],
            q25: quantile(&values, 0.25),
            q50: quantile(&values, 0.50),
            q75: quantile(&values, 0.75),
            max: values[n - 1],
        }
    }

    /// The statistics in [`STAT_LABELS`] order.
    pub fn stats(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Summarise every column of `ds`, keeping header order.
pub fn describe(ds: &Dataset) -> Vec<ColumnSummary> {
    ds.headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let summary = ColumnSummary::from_cells(name, ds.column(idx));
            debug!(
                column = %name,
                kind = ?summary.kind,
                count = summary.count,
                "summarised column"
            );
            summary
        })
        .collect()
}

/// Load `path`, summarise it and write the table to `out`. Nothing is
/// written unless loading and summarising succeed.
pub fn report<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<()> {
    let path = path.as_ref();
    let ds = dataset::load_csv(path)?;
    info!(
        path = %path.display(),
        rows = ds.len(),
        columns = ds.width(),
        "describing dataset"
    );
    let summaries = describe(&ds);
    write_summary(&summaries, out)
}
