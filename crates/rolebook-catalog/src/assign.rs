//! Random role assignment from a rolelist.
//!
//! A rolelist is a list of slot descriptions such as `Town Any`,
//! `Mafia Killing`, `Neutral Non-Chaos` or `Town Support/Protective`. The
//! first word names the alignment (matched as a case-insensitive prefix of a
//! role's archetype); the rest constrains the archetype text that follows
//! the alignment word.
//!
//! Players are shuffled first, then each slot draws a role, all from one
//! [`SeededRandom`], so a seed reproduces the whole table.

use crate::error::AssignError;
use crate::rng::SeededRandom;
use rolebook_ingest_tsv::RoleRecord;
use serde::Serialize;

/// Trimmed, non-blank lines.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Archetype text after the alignment word (`"Town Support"` -> `"Support"`).
pub fn archetype_kind(archetype: &str) -> &str {
    archetype.split_once(' ').map(|(_, rest)| rest).unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotOutcome {
    Role(RoleRecord),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// 1-based.
    pub slot_number: usize,
    pub slot_description: String,
    pub player_name: Option<String>,
    #[serde(flatten)]
    pub outcome: SlotOutcome,
}

impl Assignment {
    pub fn role(&self) -> Option<&RoleRecord> {
        match &self.outcome {
            SlotOutcome::Role(role) => Some(role),
            SlotOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            SlotOutcome::Role(_) => None,
            SlotOutcome::Error(message) => Some(message),
        }
    }
}

/// Pick a role for one slot. The generator is only advanced when a pick
/// actually happens.
pub fn resolve_slot<'a>(
    roles: &'a [RoleRecord],
    slot: &str,
    rng: &mut SeededRandom,
) -> Result<&'a RoleRecord, AssignError> {
    let parts: Vec<&str> = slot.split(' ').collect();
    if parts.len() < 2 {
        return Err(AssignError::InvalidSlot(slot.to_string()));
    }

    let alignment = parts[0];
    let spec = parts[1..].join(" ").to_lowercase();

    let alignment_lower = alignment.to_lowercase();
    let candidates: Vec<&RoleRecord> = roles
        .iter()
        .filter(|role| role.archetype.to_lowercase().starts_with(&alignment_lower))
        .collect();
    if candidates.is_empty() {
        return Err(AssignError::NoAlignment(alignment.to_string()));
    }

    if spec == "any" {
        return Ok(candidates[rng.pick_index(candidates.len())]);
    }

    let negated = spec.contains("non-");
    let cleaned = spec.replace("non-", "");
    let wanted: Vec<&str> = cleaned
        .split('/')
        .map(str::trim)
        .filter(|kind| !kind.is_empty())
        .collect();

    let matching: Vec<&RoleRecord> = candidates
        .into_iter()
        .filter(|role| {
            let kind = archetype_kind(&role.archetype).to_lowercase();
            let hit = wanted.iter().any(|want| kind.starts_with(want));
            hit != negated
        })
        .collect();
    if matching.is_empty() {
        return Err(AssignError::NoMatch(slot.to_string()));
    }

    Ok(matching[rng.pick_index(matching.len())])
}

/// Shuffle `players`, then fill every slot in order. Failed slots are
/// reported in place; they never stop the run.
pub fn assign_roles(
    roles: &[RoleRecord],
    slots: &[String],
    players: &[String],
    rng: &mut SeededRandom,
) -> Vec<Assignment> {
    let mut shuffled = players.to_vec();
    rng.shuffle(&mut shuffled);

    let assignments: Vec<Assignment> = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let outcome = match resolve_slot(roles, slot, rng) {
                Ok(role) => SlotOutcome::Role(role.clone()),
                Err(err) => {
                    tracing::debug!(slot = %slot, error = %err, "slot left unfilled");
                    SlotOutcome::Error(err.to_string())
                }
            };
            Assignment {
                slot_number: i + 1,
                slot_description: slot.clone(),
                player_name: shuffled.get(i).cloned(),
                outcome,
            }
        })
        .collect();

    tracing::info!(
        slots = slots.len(),
        players = players.len(),
        failed = assignments.iter().filter(|a| a.error().is_some()).count(),
        "assigned roles"
    );
    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i64, archetype: &str) -> RoleRecord {
        RoleRecord {
            id,
            name: format!("Role {id}"),
            image: rolebook_ingest_tsv::image_path(id),
            abilities: vec![],
            archetype: archetype.to_string(),
            wincon: String::new(),
        }
    }

    fn roles() -> Vec<RoleRecord> {
        vec![
            role(1, "Town Investigative"),
            role(2, "Town Protective"),
            role(3, "Town Support"),
            role(4, "Mafia Killing"),
            role(5, "Mafia Deception"),
            role(6, "Neutral Chaos"),
            role(7, "Neutral Evil"),
        ]
    }

    fn resolve(slot: &str) -> Result<i64, AssignError> {
        let roles = roles();
        let mut rng = SeededRandom::with_state(42);
        resolve_slot(&roles, slot, &mut rng).map(|r| r.id)
    }

    #[test]
    fn test_parse_lines_drops_blanks() {
        assert_eq!(parse_lines("  a \n\n b\r\n   \n"), vec!["a", "b"]);
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_archetype_kind() {
        assert_eq!(archetype_kind("Town Support"), "Support");
        assert_eq!(archetype_kind("Neutral Evil Killing"), "Evil Killing");
        assert_eq!(archetype_kind("Town"), "");
    }

    #[test]
    fn test_single_word_slot_is_invalid() {
        assert_eq!(resolve("Town"), Err(AssignError::InvalidSlot("Town".into())));
    }

    #[test]
    fn test_unknown_alignment() {
        assert_eq!(
            resolve("Coven Any"),
            Err(AssignError::NoAlignment("Coven".into()))
        );
        assert_eq!(
            AssignError::NoAlignment("Coven".into()).to_string(),
            "No roles found for alignment: Coven"
        );
    }

    #[test]
    fn test_any_picks_within_alignment() {
        for seed in 0..50 {
            let roles = roles();
            let mut rng = SeededRandom::with_state(seed);
            let picked = resolve_slot(&roles, "mafia ANY", &mut rng).unwrap();
            assert!(picked.archetype.starts_with("Mafia"));
        }
    }

    #[test]
    fn test_specific_archetype() {
        assert_eq!(resolve("Town Support"), Ok(3));
        assert_eq!(resolve("Town sup"), Ok(3));
    }

    #[test]
    fn test_alternatives() {
        for seed in 0..50 {
            let roles = roles();
            let mut rng = SeededRandom::with_state(seed);
            let id = resolve_slot(&roles, "Town Support/Protective", &mut rng)
                .unwrap()
                .id;
            assert!(id == 2 || id == 3);
        }
    }

    #[test]
    fn test_negation_excludes_listed_archetypes() {
        for seed in 0..50 {
            let roles = roles();
            let mut rng = SeededRandom::with_state(seed);
            let id = resolve_slot(&roles, "Neutral Non-Chaos", &mut rng).unwrap().id;
            assert_eq!(id, 7);
            let id = resolve_slot(&roles, "Town non-Investigative/NON-Support", &mut rng)
                .unwrap()
                .id;
            assert_eq!(id, 2);
        }
    }

    #[test]
    fn test_no_match_reports_whole_slot() {
        assert_eq!(
            resolve("Mafia Support"),
            Err(AssignError::NoMatch("Mafia Support".into()))
        );
    }

    #[test]
    fn test_failed_slot_does_not_consume_randomness() {
        let roles = roles();
        let mut a = SeededRandom::with_state(7);
        let mut b = SeededRandom::with_state(7);
        assert!(resolve_slot(&roles, "Mafia Support", &mut a).is_err());
        assert_eq!(a, b);
        resolve_slot(&roles, "Town Any", &mut a).unwrap();
        resolve_slot(&roles, "Town Any", &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_assignments_keep_slot_order_and_pair_players() {
        let roles = roles();
        let slots = parse_lines("Town Any\nMafia Killing\nBogus\n");
        let players = parse_lines("Ann\nBob");
        let mut rng = SeededRandom::from_seed(Some("table"));
        let out = assign_roles(&roles, &slots, &players, &mut rng);

        assert_eq!(out.len(), 3);
        assert_eq!(
            out.iter().map(|a| a.slot_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(out[1].role().map(|r| r.id), Some(4));
        assert_eq!(out[2].error(), Some("Invalid slot format: Bogus"));
        assert!(out[2].player_name.is_none());

        let mut named: Vec<String> = out.iter().filter_map(|a| a.player_name.clone()).collect();
        named.sort();
        assert_eq!(named, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_same_seed_same_table() {
        let roles = roles();
        let slots = parse_lines("Town Any\nTown Any\nNeutral Any\nMafia Any");
        let players = parse_lines("A\nB\nC\nD\nE");
        let first = assign_roles(&roles, &slots, &players, &mut SeededRandom::from_seed(Some("x")));
        let second = assign_roles(&roles, &slots, &players, &mut SeededRandom::from_seed(Some("x")));
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_shape() {
        let assignment = Assignment {
            slot_number: 1,
            slot_description: "Town Any".into(),
            player_name: None,
            outcome: SlotOutcome::Error("No roles found matching: Town Any".into()),
        };
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slotNumber": 1,
                "slotDescription": "Town Any",
                "playerName": null,
                "error": "No roles found matching: Town Any"
            })
        );

        let assignment = Assignment {
            outcome: SlotOutcome::Role(role(3, "Town Support")),
            player_name: Some("Ann".into()),
            ..assignment
        };
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["playerName"], "Ann");
        assert_eq!(json["role"]["id"], 3);
    }
}
