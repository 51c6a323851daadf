use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::io::Write;

use super::Histogram;

/// Width in characters of the tallest bar.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
}

pub const LOSS_LABELS: Labels<'static> = Labels {
    title: "Histogram of Data Loss From Filtering Collisions",
    x_label: "Percentage Loss",
    y_label: "Number of Users",
};

fn bar(count: u64, tallest: u64) -> String {
    if tallest == 0 {
        return String::new();
    }
    let len = (count as f64 / tallest as f64 * BAR_WIDTH as f64).round() as usize;
    // a non-empty bin always shows something
    let len = if count > 0 { len.max(1) } else { 0 };
    "█".repeat(len)
}

fn bin_label(lo: f64, hi: f64, last: bool) -> String {
    let close = if last { ']' } else { ')' };
    format!("[{:.3}, {:.3}{}", lo, hi, close)
}

/// Lay the histogram out as a horizontal bar chart, one row per bin.
pub fn histogram_table(hist: &Histogram, labels: &Labels<'_>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new(labels.x_label).style_spec("bFg"),
        Cell::new(labels.y_label).style_spec("bFg"),
        Cell::new(""),
    ]));

    let tallest = hist.counts.iter().copied().max().unwrap_or(0);
    let last = hist.bins() - 1;
    for (i, (lo, hi, count)) in hist.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&bin_label(lo, hi, i == last)),
            Cell::new(&count.to_string()).style_spec("r"),
            Cell::new(&bar(count, tallest)),
        ]));
    }
    table
}

/// Write the title followed by the bar chart.
pub fn render_histogram<W: Write>(hist: &Histogram, labels: &Labels<'_>, out: &mut W) -> Result<()> {
    writeln!(out, "{}", labels.title)?;
    writeln!(out)?;
    histogram_table(hist, labels)
        .print(out)
        .context("writing histogram")?;
    Ok(())
}
