// src/dataset/mod.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// Tokens read as "no value" in addition to the empty string.
const NA_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A",
    "#N/A N/A", "#NA", "<NA>", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

/// A header row plus every data row of a CSV file, all fields kept as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Iterate the raw cells of column `idx`, top to bottom.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> + Clone + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(idx).map(String::as_str).unwrap_or(""))
    }
}

/// True when `raw` should be treated as a missing value. Any spelling that
/// parses to NaN (`nAn`, `+nan`, ...) counts as missing too.
pub fn is_missing(raw: &str) -> bool {
    let v = raw.trim();
    v.is_empty() || NA_TOKENS.contains(&v) || v.parse::<f64>().is_ok_and(f64::is_nan)
}

/// Open `path` and parse it as a comma-separated file with a header row.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv(file).with_context(|| format!("parsing {}", path.display()))
}

/// Parse CSV text from any reader. Every data row must have exactly as many
/// fields as the header.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading header row")?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        bail!("no columns to parse from file");
    }

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let record = record.with_context(|| format!("reading data row at line {}", idx + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded dataset");
    Ok(Dataset { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{ErrorKind, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_csv_keeps_header_order_and_duplicates() -> Result<()> {
        let text = "a,b,a\n1,x,2\n3,y,4\n";
        let ds = read_csv(text.as_bytes())?;

        assert_eq!(ds.headers, vec!["a", "b", "a"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column(2).collect::<Vec<_>>(), vec!["2", "4"]);
        Ok(())
    }

    #[test]
    fn test_read_csv_handles_quoted_fields() -> Result<()> {
        let text = "name,value\n\"Smith, J\",1.5\n";
        let ds = read_csv(text.as_bytes())?;

        assert_eq!(ds.rows[0], vec!["Smith, J", "1.5"]);
        Ok(())
    }

    #[test]
    fn test_read_csv_header_only() -> Result<()> {
        let ds = read_csv("a,b\n".as_bytes())?;
        assert_eq!(ds.width(), 2);
        assert!(ds.is_empty());
        Ok(())
    }

    #[test]
    fn test_short_row_is_an_error() {
        let err = read_csv("a,b,c\n1,2,3\n4,5\n".as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(read_csv("".as_bytes()).is_err());
    }

    #[test]
    fn test_load_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(dir.path().join("absent.csv")).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_load_csv_from_disk() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "x,y\n1,2\n")?;

        let ds = load_csv(tmp.path())?;
        assert_eq!(ds.rows, vec![vec!["1".to_string(), "2".to_string()]]);
        Ok(())
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(""));
        assert!(is_missing("  "));
        assert!(is_missing("NA"));
        assert!(is_missing("NaN"));
        assert!(!is_missing("0"));
        assert!(!is_missing("abc"));
    }

    #[test]
    fn test_nan_spellings_are_missing() {
        for tok in ["-nan", "NAN", "+nan", "nAn", "#NA", "#N/A N/A", "-1.#IND", "1.#QNAN"] {
            assert!(is_missing(tok), "{}", tok);
        }
        assert!(!is_missing("inf"));
        assert!(!is_missing("-1.5"));
    }
}
