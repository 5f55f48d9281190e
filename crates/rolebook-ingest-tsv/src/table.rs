//! Raw TSV reading.
//!
//! Tables are tab-delimited, headerless and ragged: every record keeps the
//! number of fields it actually has. Standard double-quote quoting is
//! honoured. Blank lines yield no row. A leading UTF-8 byte order mark is
//! dropped.

use crate::error::TsvError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One record of a TSV table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    /// 1-based line the record starts on.
    pub line: u64,
    pub cells: Vec<String>,
}

impl TsvRow {
    pub fn new(line: u64, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// Read every record from `reader`.
pub fn read_tsv<R: Read>(reader: R) -> Result<Vec<TsvRow>, TsvError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(TsvRow::new(
            line,
            record.iter().map(str::to_string).collect(),
        ));
    }
    Ok(rows)
}

/// Read every record from the file at `path`.
pub fn read_tsv_path(path: &Path) -> Result<Vec<TsvRow>, TsvError> {
    let file = File::open(path).map_err(|e| TsvError::io(path, e))?;
    let rows = read_tsv(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read TSV table");
    Ok(rows)
}
