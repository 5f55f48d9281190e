use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ROLES_TSV: &str = "roles.tsv";
pub const ROLES_JSON: &str = "roles.json";
pub const ROLELISTS_TSV: &str = "rolelists.tsv";
pub const ROLELISTS_JSON: &str = "rolelists.json";

/// Input/output file pair for one conversion run.
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertPaths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// `roles.tsv` -> `roles.json`
    pub fn roles_default() -> Self {
        Self::new(ROLES_TSV, ROLES_JSON)
    }

    /// `rolelists.tsv` -> `rolelists.json`
    pub fn rolelists_default() -> Self {
        Self::new(ROLELISTS_TSV, ROLELISTS_JSON)
    }

    /// Replace whichever side was given explicitly.
    pub fn with_overrides(self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            input: input.unwrap_or(self.input),
            output: output.unwrap_or(self.output),
        }
    }
}
