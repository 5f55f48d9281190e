use std::path::{Path, PathBuf};

/// Errors raised while reading a TSV table or writing its JSON rendering.
#[derive(Debug, thiserror::Error)]
pub enum TsvError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TSV decode error: {0}")]
    Decode(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid role id {value:?} on line {line}")]
    InvalidId { line: u64, value: String },
    #[error("{} is empty", .path.display())]
    EmptyInput { path: PathBuf },
}

impl TsvError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when this is a "file not found" error for exactly `path`.
    pub fn is_not_found(&self, path: &Path) -> bool {
        match self {
            Self::Io { path: p, source } => {
                p == path && source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
