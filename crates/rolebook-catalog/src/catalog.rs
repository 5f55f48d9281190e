//! Browsing the role catalog: filters, sort orders and the investigative
//! result groups.

use rolebook_ingest_tsv::roles::NAME_BREAK;
use rolebook_ingest_tsv::RoleRecord;
use std::collections::{BTreeSet, HashSet};

/// Role whose investigation results are the groups below.
pub const INVESTIGATOR_ID: i64 = 53;

/// Roles that show up together in an investigation result.
pub const INVESTIGATIVE_GROUPS: [[i64; 5]; 12] = [
    [46, 47, 68, 57, 90],
    [53, 59, 42, 4, 24],
    [9, 61, 76, 58, 39],
    [45, 10, 35, 91, 87],
    [29, 7, 14, 78, 77],
    [25, 18, 63, 92, 3],
    [65, 27, 38, 80, 85],
    [69, 95, 93, 12, 40],
    [62, 55, 81, 75, 23],
    [94, 13, 17, 1, 21],
    [49, 74, 22, 36, 72],
    [67, 20, 15, 37, 60],
];

/// Name as shown on one line.
pub fn display_name(name: &str) -> String {
    name.replace(NAME_BREAK, " ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Series {
    #[default]
    Both,
    LittleMiss,
    Mr,
}

impl Series {
    pub fn admits(self, role: &RoleRecord) -> bool {
        let name = display_name(&role.name);
        match self {
            Series::Both => true,
            Series::LittleMiss => name.starts_with("Little Miss"),
            Series::Mr => name.starts_with("Mr."),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Order of `roles.json`.
    #[default]
    Rolelist,
    /// Display name, case-insensitive.
    Alpha,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// `None` admits every archetype.
    pub archetypes: Option<BTreeSet<String>>,
    pub series: Series,
    pub sort: SortOrder,
}

/// Distinct archetypes, first-seen order.
pub fn archetypes_in_order(roles: &[RoleRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    roles
        .iter()
        .map(|role| role.archetype.as_str())
        .filter(|archetype| seen.insert(*archetype))
        .collect()
}

/// Archetypes belonging to one alignment, e.g. `"Town"` -> `Town Support`, ...
pub fn group_archetypes<'a>(archetypes: &[&'a str], group: &str) -> Vec<&'a str> {
    let prefix = format!("{group} ");
    archetypes
        .iter()
        .copied()
        .filter(|archetype| archetype.starts_with(&prefix))
        .collect()
}

pub fn query_roles<'a>(roles: &'a [RoleRecord], query: &CatalogQuery) -> Vec<&'a RoleRecord> {
    let mut shown: Vec<&RoleRecord> = roles
        .iter()
        .filter(|role| {
            query
                .archetypes
                .as_ref()
                .map_or(true, |set| set.contains(&role.archetype))
        })
        .filter(|role| query.series.admits(role))
        .collect();

    if query.sort == SortOrder::Alpha {
        shown.sort_by_cached_key(|role| display_name(&role.name).to_lowercase());
    }
    shown
}

pub fn status_text(shown: usize, total: usize) -> String {
    if shown == 0 {
        "No roles match your filters.".to_string()
    } else {
        format!("{shown}/{total} roles displayed.")
    }
}

/// Roles of the investigative group containing `id`, in group order.
/// Ids with no matching role are dropped.
pub fn investigative_group(roles: &[RoleRecord], id: i64) -> Vec<&RoleRecord> {
    INVESTIGATIVE_GROUPS
        .iter()
        .find(|group| group.contains(&id))
        .map(|group| {
            group
                .iter()
                .filter_map(|member| roles.iter().find(|role| role.id == *member))
                .collect()
        })
        .unwrap_or_default()
}

/// Heading for an investigative group: `"<investigator> Results"`.
pub fn investigator_heading(roles: &[RoleRecord]) -> String {
    let name = roles
        .iter()
        .find(|role| role.id == INVESTIGATOR_ID)
        .map(|role| display_name(&role.name))
        .unwrap_or_else(|| "Investigator".to_string());
    format!("{name} Results")
}
