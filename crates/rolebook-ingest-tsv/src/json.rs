//! Pretty JSON output.
//!
//! Output mirrors what the front-end pages were built against: configurable
//! indentation, UTF-8 with non-ASCII text written verbatim, no trailing
//! newline.

use crate::error::TsvError;
use serde::Serialize;
use std::path::Path;

/// Indentation used when pretty-printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonStyle {
    pub indent: usize,
}

impl JsonStyle {
    /// `roles.json` layout.
    pub const ROLES: JsonStyle = JsonStyle { indent: 4 };
    /// `rolelists.json` layout.
    pub const ROLELISTS: JsonStyle = JsonStyle { indent: 2 };
}

pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<Vec<u8>, TsvError> {
    let indent = " ".repeat(style.indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

pub fn to_json_string<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<String, TsvError> {
    Ok(String::from_utf8(to_json_bytes(value, style)?)?)
}

/// Serialize fully in memory, then overwrite `path` in a single write.
pub fn write_json<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<(), TsvError> {
    let bytes = to_json_bytes(value, style)?;
    std::fs::write(path, &bytes).map_err(|e| TsvError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote JSON");
    Ok(())
}
