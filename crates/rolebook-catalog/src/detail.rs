//! Single-role detail view: lookup by id, wrap-around neighbours and the
//! display fields derived from a record.
//!
//! Abilities may carry `<tag>` markers (`"Visit a player <night>"`). The
//! markers are pulled out as icon tags and removed from the text.

use crate::catalog::{display_name, investigative_group};
use regex::Regex;
use rolebook_ingest_tsv::roles::NAME_BREAK;
use rolebook_ingest_tsv::RoleRecord;
use serde::Serialize;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<([^>]+)>").expect("tag pattern is valid"))
}

/// Position of the role with `id`, or 0 when no role has it.
pub fn role_index_by_id(roles: &[RoleRecord], id: i64) -> usize {
    roles.iter().position(|role| role.id == id).unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Index one step away from `index` in a list of `len`, wrapping at both ends.
pub fn neighbor(index: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Previous if index == 0 => len - 1,
        Direction::Previous => index - 1,
        Direction::Next if index + 1 >= len => 0,
        Direction::Next => index + 1,
    }
}

/// Split an ability into its text (markers removed, trimmed) and its tags.
pub fn parse_ability_tags(ability: &str) -> (String, Vec<String>) {
    let pattern = tag_pattern();
    let tags = pattern
        .captures_iter(ability)
        .map(|caps| caps[1].to_string())
        .collect();
    let text = pattern.replace_all(ability, "").trim().to_string();
    (text, tags)
}

pub fn icon_path(tag: &str) -> String {
    format!("icons/icon-{tag}.svg")
}

/// `Town Support` -> `Town<br>Support`; only the first space breaks.
pub fn archetype_display(archetype: &str) -> String {
    archetype.replacen(' ', NAME_BREAK, 1)
}

/// First word of the archetype, lowercased (`town`, `mafia`, ...).
pub fn alignment_class(archetype: &str) -> String {
    archetype
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// `Little Miss` names are female, everything else male.
    pub fn of(name: &str) -> Self {
        if name.starts_with("Little Miss") {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Gender::Female => '♀',
            Gender::Male => '♂',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityLine {
    pub text: String,
    pub tags: Vec<String>,
}

/// Everything the detail view shows for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDetail<'a> {
    pub index: usize,
    pub role: &'a RoleRecord,
    pub title: String,
    pub gender: Gender,
    pub archetype_display: String,
    pub alignment: String,
    pub abilities: Vec<AbilityLine>,
    pub previous_id: i64,
    pub next_id: i64,
    pub investigative_group: Vec<i64>,
}

impl<'a> RoleDetail<'a> {
    /// Detail for `roles[index]`; `None` when the index is out of range.
    pub fn at(roles: &'a [RoleRecord], index: usize) -> Option<Self> {
        let role = roles.get(index)?;
        let previous = &roles[neighbor(index, roles.len(), Direction::Previous)];
        let next = &roles[neighbor(index, roles.len(), Direction::Next)];

        let abilities = role
            .abilities
            .iter()
            .map(|ability| {
                let (text, tags) = parse_ability_tags(ability);
                AbilityLine { text, tags }
            })
            .collect();

        Some(Self {
            index,
            role,
            title: display_name(&role.name),
            gender: Gender::of(&role.name),
            archetype_display: archetype_display(&role.archetype),
            alignment: alignment_class(&role.archetype),
            abilities,
            previous_id: previous.id,
            next_id: next.id,
            investigative_group: investigative_group(roles, role.id)
                .iter()
                .map(|member| member.id)
                .collect(),
        })
    }

    /// Detail for the role with `id`, falling back to the first role.
    pub fn by_id(roles: &'a [RoleRecord], id: i64) -> Option<Self> {
        Self::at(roles, role_index_by_id(roles, id))
    }
}
