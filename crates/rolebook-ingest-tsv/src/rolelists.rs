//! Column grouping (`rolelists.tsv` -> `rolelists.json`).
//!
//! Each column of the table is one rolelist. Its trimmed, non-blank cells
//! are collected in row order and stored under the key
//! `"<number of entries>"`. Two columns with the same count share a key:
//! the key keeps the position of the first such column and the value of
//! the last one.
//!
//! Failures here are soft: [`run_rolelists`] always returns normally and
//! describes what happened in a [`RolelistsOutcome`].

use crate::config::ConvertPaths;
use crate::error::TsvError;
use crate::json::{write_json, JsonStyle};
use crate::table::{read_tsv, TsvRow};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Entry count (as a decimal string) -> entries of the last column with that count.
pub type ColumnGroupMap = IndexMap<String, Vec<String>>;

/// Trimmed non-blank cells of column `index`, skipping rows too short to reach it.
pub fn column_entries(rows: &[TsvRow], index: usize) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.get(index))
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn group_columns(rows: &[TsvRow]) -> ColumnGroupMap {
    let width = rows.iter().map(TsvRow::len).max().unwrap_or(0);

    (0..width)
        .map(|index| column_entries(rows, index))
        .filter(|entries| !entries.is_empty())
        .fold(ColumnGroupMap::new(), |mut groups, entries| {
            let key = entries.len().to_string();
            if groups.contains_key(&key) {
                tracing::debug!(key = %key, "column count collides; later column replaces earlier");
            }
            groups.insert(key, entries);
            groups
        })
}

/// Successful grouping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolelistsReport {
    pub groups: ColumnGroupMap,
}

impl RolelistsReport {
    /// Keys in ascending numeric order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        keys.sort_by_key(|key| key.parse::<usize>().unwrap_or(usize::MAX));
        keys
    }
}

/// Render keys as `['2', '3']`.
pub fn format_key_list(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|key| format!("'{key}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Read `paths.input`, group its columns, and overwrite `paths.output`.
///
/// A zero-byte input is reported as [`TsvError::EmptyInput`] and nothing
/// is written. Any other input is written, even when it groups to `{}`.
pub fn convert_rolelists_file(paths: &ConvertPaths) -> Result<RolelistsReport, TsvError> {
    let bytes = std::fs::read(&paths.input).map_err(|e| TsvError::io(&paths.input, e))?;
    if bytes.is_empty() {
        return Err(TsvError::EmptyInput {
            path: paths.input.clone(),
        });
    }
    let rows = read_tsv(bytes.as_slice())?;

    let groups = group_columns(&rows);
    write_json(&paths.output, &groups, JsonStyle::ROLELISTS)?;
    tracing::info!(
        input = %paths.input.display(),
        output = %paths.output.display(),
        groups = groups.len(),
        "grouped rolelist columns"
    );

    Ok(RolelistsReport { groups })
}

/// What a fail-soft rolelists run did.
#[derive(Debug)]
pub enum RolelistsOutcome {
    Written(RolelistsReport),
    EmptyInput,
    MissingInput { path: PathBuf },
    Failed(TsvError),
}

impl RolelistsOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }

    /// Human-readable summary; the only signal besides the output file.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Written(report) => format!(
                "Successfully processed {} columns\nColumn lengths found: {}",
                report.groups.len(),
                format_key_list(&report.sorted_keys())
            ),
            Self::EmptyInput => "Warning: TSV file is empty".to_string(),
            Self::MissingInput { path } => {
                format!("Error: {} file not found", path.display())
            }
            Self::Failed(err) => format!("Error processing file: {err}"),
        }
    }
}

/// Run the grouping conversion without ever returning an error.
pub fn run_rolelists(paths: &ConvertPaths) -> RolelistsOutcome {
    match convert_rolelists_file(paths) {
        Ok(report) => RolelistsOutcome::Written(report),
        Err(TsvError::EmptyInput { .. }) => RolelistsOutcome::EmptyInput,
        Err(err) if err.is_not_found(&paths.input) => RolelistsOutcome::MissingInput {
            path: paths.input.clone(),
        },
        Err(err) => {
            tracing::warn!(error = %err, "rolelists conversion failed");
            RolelistsOutcome::Failed(err)
        }
    }
}
