use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("rolelist key {0:?} is not a player count")]
    InvalidPlayerCount(String),
}

/// Why a single rolelist slot could not be filled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("Invalid slot format: {0}")]
    InvalidSlot(String),
    #[error("No roles found for alignment: {0}")]
    NoAlignment(String),
    #[error("No roles found matching: {0}")]
    NoMatch(String),
}
