//! TSV ingestion for Rolebook
//!
//! Turns the two hand-maintained spreadsheets into the JSON documents the
//! role browser reads:
//! - `roles.tsv` -> `roles.json`: one [`RoleRecord`] per row (fail-fast)
//! - `rolelists.tsv` -> `rolelists.json`: one rolelist per column, keyed by
//!   its entry count (fail-soft, see [`run_rolelists`])
//!
//! Both conversions read the whole table into memory, build the result, and
//! only then overwrite the output file in one write.

pub mod config;
pub mod error;
pub mod json;
pub mod rolelists;
pub mod roles;
pub mod table;

pub use config::ConvertPaths;
pub use error::TsvError;
pub use json::{to_json_string, write_json, JsonStyle};
pub use rolelists::{
    column_entries, convert_rolelists_file, format_key_list, group_columns, run_rolelists,
    ColumnGroupMap, RolelistsOutcome, RolelistsReport,
};
pub use roles::{
    convert_roles, convert_roles_file, image_path, normalize_name, role_from_row,
    split_abilities, RoleRecord, RolesReport,
};
pub use table::{read_tsv, read_tsv_path, TsvRow};
