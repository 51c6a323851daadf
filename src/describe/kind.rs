use tracing::debug;

use crate::dataset::is_missing;

/// How a column is summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// First pass of the column scan. A column is numeric when every
/// non-missing cell parses as `f64`; missing cells are ignored, so a column
/// with no values at all is numeric.
pub fn infer_kind<'a, I>(name: &str, cells: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a str>,
{
    for cell in cells {
        if is_missing(cell) {
            continue;
        }
        if parse_number(cell).is_none() {
            debug!("infer_kind: column `{}` holds non-numeric `{}`", name, cell);
            return ColumnKind::Text;
        }
    }
    ColumnKind::Numeric
}

/// Parse a cell as a number, ignoring surrounding whitespace. NaN is not a
/// number here; such cells are missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
