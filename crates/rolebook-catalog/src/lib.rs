//! Read-side logic over the converted Rolebook JSON.
//!
//! Everything here consumes `roles.json` / `rolelists.json` as produced by
//! `rolebook-ingest-tsv`:
//! - [`assign`]: seeded random role assignment from a rolelist
//! - [`explorer`]: rolelists by player count, alignment breakdowns
//! - [`catalog`]: filtering/sorting the role catalog
//! - [`detail`]: one role with its neighbours and ability tags

use std::path::Path;

pub mod assign;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod explorer;
pub mod rng;

pub use assign::{assign_roles, parse_lines, resolve_slot, Assignment, SlotOutcome};
pub use catalog::{query_roles, CatalogQuery, Series, SortOrder};
pub use detail::{Direction, RoleDetail};
pub use error::{AssignError, CatalogError};
pub use explorer::{AlignmentCounts, RolelistBook, Side};
pub use rng::SeededRandom;

use rolebook_ingest_tsv::{ColumnGroupMap, RoleRecord};

fn read_text(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a `roles.json` array.
pub fn load_roles(path: &Path) -> Result<Vec<RoleRecord>, CatalogError> {
    let roles: Vec<RoleRecord> = parse_json(path, &read_text(path)?)?;
    tracing::debug!(path = %path.display(), roles = roles.len(), "loaded roles");
    Ok(roles)
}

/// Load a `rolelists.json` object.
pub fn load_rolelists(path: &Path) -> Result<RolelistBook, CatalogError> {
    let groups: ColumnGroupMap = parse_json(path, &read_text(path)?)?;
    let book = RolelistBook::from_groups(groups)?;
    tracing::debug!(path = %path.display(), lists = book.player_counts().len(), "loaded rolelists");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_roles_reports_bad_json_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(&path, "[{\"id\": 1}]").unwrap();

        let err = load_roles(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
        assert!(err.to_string().contains("roles.json"));
    }

    #[test]
    fn test_load_rolelists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rolelists.json");
        std::fs::write(&path, r#"{"2": ["Town Any", "Mafia Any"], "1": ["Town Any"]}"#).unwrap();

        let book = load_rolelists(&path).unwrap();
        assert_eq!(book.player_counts(), vec![1, 2]);
        assert_eq!(book.rolelist(2), ["Town Any", "Mafia Any"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rolelists(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
