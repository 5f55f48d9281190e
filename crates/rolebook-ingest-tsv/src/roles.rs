//! Role table conversion (`roles.tsv` -> `roles.json`).
//!
//! Each row is `id \t name \t archetype \t abilities \t wincon`. Rows with
//! fewer than five fields are skipped without a diagnostic; any other
//! problem (unreadable file, non-integer id) aborts the run before anything
//! is written.

use crate::config::ConvertPaths;
use crate::error::TsvError;
use crate::json::{write_json, JsonStyle};
use crate::table::{read_tsv_path, TsvRow};
use serde::{Deserialize, Serialize};

/// Separator between abilities inside the abilities column.
pub const ABILITY_SEPARATOR: &str = " // ";

/// Rows narrower than this contribute nothing.
pub const MIN_ROLE_FIELDS: usize = 5;

/// Line-break marker inserted after "Little Miss".
pub const NAME_BREAK: &str = "<br>";

/// One role, in the field order the front-end expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub abilities: Vec<String>,
    pub archetype: String,
    pub wincon: String,
}

/// Result of a file-to-file roles conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolesReport {
    pub records: Vec<RoleRecord>,
    pub skipped_rows: usize,
}

/// Plain substring replacement: every `Mr` becomes `Mr.` (even inside a
/// word), and `Little Miss ` gets a line-break marker instead of the space.
pub fn normalize_name(raw: &str) -> String {
    raw.replace("Mr", "Mr.")
        .replace("Little Miss ", &format!("Little Miss{NAME_BREAK}"))
}

/// Split on `" // "` and trim each token. An empty field yields `[""]`.
pub fn split_abilities(field: &str) -> Vec<String> {
    field
        .split(ABILITY_SEPARATOR)
        .map(|ability| ability.trim().to_string())
        .collect()
}

pub fn image_path(id: i64) -> String {
    format!("/images/Artboard {id}.svg")
}

fn parse_role_id(raw: &str, line: u64) -> Result<i64, TsvError> {
    raw.trim().parse::<i64>().map_err(|_| TsvError::InvalidId {
        line,
        value: raw.to_string(),
    })
}

/// Build a record from one row, or `None` when the row is too short.
pub fn role_from_row(row: &TsvRow) -> Result<Option<RoleRecord>, TsvError> {
    let [id, name, archetype, abilities, wincon, ..] = row.cells.as_slice() else {
        tracing::trace!(line = row.line, fields = row.len(), "skipping short role row");
        return Ok(None);
    };

    let id = parse_role_id(id, row.line)?;
    Ok(Some(RoleRecord {
        id,
        name: normalize_name(name),
        image: image_path(id),
        abilities: split_abilities(abilities),
        archetype: archetype.clone(),
        wincon: wincon.clone(),
    }))
}

/// Convert rows into records, preserving row order.
pub fn convert_roles(rows: &[TsvRow]) -> Result<Vec<RoleRecord>, TsvError> {
    rows.iter()
        .filter_map(|row| role_from_row(row).transpose())
        .collect()
}

/// Read `paths.input`, convert, and overwrite `paths.output`.
pub fn convert_roles_file(paths: &ConvertPaths) -> Result<RolesReport, TsvError> {
    let rows = read_tsv_path(&paths.input)?;
    let records = convert_roles(&rows)?;
    let skipped_rows = rows.len() - records.len();

    write_json(&paths.output, &records, JsonStyle::ROLES)?;
    tracing::info!(
        input = %paths.input.display(),
        output = %paths.output.display(),
        records = records.len(),
        skipped_rows,
        "converted role table"
    );

    Ok(RolesReport {
        records,
        skipped_rows,
    })
}
