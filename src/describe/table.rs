use anyhow::{Context, Result};
use prettytable::{format, Cell, Row, Table};
use std::io::Write;

use super::{ColumnSummary, STAT_LABELS};

/// Fixed six-decimal rendering; undefined statistics print as `NaN`.
pub fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", v)
    }
}

/// One column per summarised column, one row per statistic.
pub fn render_summary(summaries: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let mut header = vec![Cell::new("")];
    header.extend(summaries.iter().map(|s| Cell::new(&s.name).style_spec("b")));
    table.set_titles(Row::new(header));

    let stats: Vec<[f64; 8]> = summaries.iter().map(ColumnSummary::stats).collect();
    for (i, label) in STAT_LABELS.iter().enumerate() {
        let mut cells = vec![Cell::new(label).style_spec("b")];
        cells.extend(
            stats
                .iter()
                .map(|s| Cell::new(&format_stat(s[i])).style_spec("r")),
        );
        table.add_row(Row::new(cells));
    }
    table
}

pub fn write_summary<W: Write>(summaries: &[ColumnSummary], out: &mut W) -> Result<()> {
    render_summary(summaries)
        .print(out)
        .context("writing summary table")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(f64::NAN), "NaN");
        assert_eq!(format_stat(2.5), "2.500000");
        assert_eq!(format_stat(-0.125), "-0.125000");
    }

    #[test]
    fn test_table_shape() {
        let summaries = vec![
            ColumnSummary::from_cells("score", ["1", "3"]),
            ColumnSummary::from_cells("label", ["a", "b"]),
        ];
        let table = render_summary(&summaries);

        assert_eq!(table.len(), STAT_LABELS.len());
        let first = table.get_row(0).unwrap();
        assert_eq!(first.get_cell(0).unwrap().get_content(), "count");
        assert_eq!(first.get_cell(1).unwrap().get_content(), "2.000000");
        assert_eq!(first.get_cell(2).unwrap().get_content(), "2.000000");

        let mean = table.get_row(1).unwrap();
        assert_eq!(mean.get_cell(1).unwrap().get_content(), "2.000000");
        assert_eq!(mean.get_cell(2).unwrap().get_content(), "NaN");
    }

    #[test]
    fn test_written_output_lists_labels_in_order() -> Result<()> {
        let summaries = vec![ColumnSummary::from_cells("x", ["1", "2", "3"])];
        let mut out = Vec::new();
        write_summary(&summaries, &mut out)?;

        let text = String::from_utf8(out)?;
        let positions: Vec<usize> = STAT_LABELS
            .iter()
            .map(|l| text.find(&format!(" {} ", l)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains(" x "));
        Ok(())
    }
}
