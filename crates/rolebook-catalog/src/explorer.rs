//! Rolelists by player count, with alignment breakdowns.

use crate::error::CatalogError;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Player count shown first when the book has it.
pub const PREFERRED_PLAYER_COUNT: usize = 12;
/// Otherwise, the first count at or above this.
pub const MIN_DEFAULT_PLAYER_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Town,
    Mafia,
    Neutral,
}

impl Side {
    /// Side of a rolelist entry, by case-insensitive prefix.
    pub fn of(entry: &str) -> Option<Side> {
        let lower = entry.to_lowercase();
        if lower.starts_with("town") {
            Some(Side::Town)
        } else if lower.starts_with("mafia") {
            Some(Side::Mafia)
        } else if lower.starts_with("neutral") {
            Some(Side::Neutral)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Town => "Town",
            Side::Mafia => "Mafia",
            Side::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentCounts {
    pub town: usize,
    pub mafia: usize,
    pub neutral: usize,
}

impl AlignmentCounts {
    pub fn count<S: AsRef<str>>(entries: &[S]) -> Self {
        entries
            .iter()
            .filter_map(|entry| Side::of(entry.as_ref()))
            .fold(Self::default(), |mut counts, side| {
                match side {
                    Side::Town => counts.town += 1,
                    Side::Mafia => counts.mafia += 1,
                    Side::Neutral => counts.neutral += 1,
                }
                counts
            })
    }

    /// `"7 Town, 3 Mafia, 2 Neutral"`, leaving out empty sides.
    pub fn summary(&self) -> String {
        [
            (self.town, Side::Town),
            (self.mafia, Side::Mafia),
            (self.neutral, Side::Neutral),
        ]
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, side)| format!("{n} {}", side.label()))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Entries split into the town column and the evil (mafia + neutral) column.
/// Unrecognised entries land in neither.
pub fn split_sides<S: AsRef<str>>(entries: &[S]) -> (Vec<&str>, Vec<&str>) {
    let mut town = Vec::new();
    let mut evil = Vec::new();
    for entry in entries {
        let entry = entry.as_ref();
        match Side::of(entry) {
            Some(Side::Town) => town.push(entry),
            Some(Side::Mafia | Side::Neutral) => evil.push(entry),
            None => {}
        }
    }
    (town, evil)
}

/// Copy-paste form: one entry per line.
pub fn plain_text<S: AsRef<str>>(entries: &[S]) -> String {
    entries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rolelists keyed by player count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolelistBook {
    lists: BTreeMap<usize, Vec<String>>,
}

impl RolelistBook {
    pub fn from_groups(groups: IndexMap<String, Vec<String>>) -> Result<Self, CatalogError> {
        let mut lists = BTreeMap::new();
        for (key, entries) in groups {
            let count = key
                .trim()
                .parse::<usize>()
                .map_err(|_| CatalogError::InvalidPlayerCount(key.clone()))?;
            lists.insert(count, entries);
        }
        Ok(Self { lists })
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Ascending.
    pub fn player_counts(&self) -> Vec<usize> {
        self.lists.keys().copied().collect()
    }

    pub fn range(&self) -> Option<(usize, usize)> {
        let min = *self.lists.keys().next()?;
        let max = *self.lists.keys().next_back()?;
        Some((min, max))
    }

    pub fn default_player_count(&self) -> Option<usize> {
        if self.lists.contains_key(&PREFERRED_PLAYER_COUNT) {
            return Some(PREFERRED_PLAYER_COUNT);
        }
        self.lists
            .range(MIN_DEFAULT_PLAYER_COUNT..)
            .next()
            .or_else(|| self.lists.iter().next())
            .map(|(count, _)| *count)
    }

    /// Empty when there is no list for `count`.
    pub fn rolelist(&self, count: usize) -> &[String] {
        self.lists.get(&count).map(Vec::as_slice).unwrap_or(&[])
    }
}
