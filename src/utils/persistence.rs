//! Versioned JSON snapshots of the game state.
//!
//! Loading validates the whole snapshot before returning it, so a corrupt
//! or hand-edited file can never replace a running state halfway.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::character::Character;
use crate::core::constants::{POWER_CAP, SNAPSHOT_VERSION, STAT_CAP};
use crate::core::game_state::GameState;
use crate::quests::QuestStatus;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
    #[error("invalid snapshot: {0}")]
    Invalid(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(flatten)]
    state: GameState,
}

#[derive(Debug, Serialize, Deserialize)]
struct RosterSnapshot {
    version: u32,
    characters: Vec<Character>,
}

pub fn save_snapshot(path: impl AsRef<Path>, state: &GameState) -> Result<(), SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        state: state.clone(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<GameState, SnapshotError> {
    let json = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Version {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    validate_state(&snapshot.state)?;
    Ok(snapshot.state)
}

/// Writes the roster alone, for moving a cast between saves.
pub fn export_roster(
    path: impl AsRef<Path>,
    characters: &[Character],
) -> Result<(), SnapshotError> {
    let snapshot = RosterSnapshot {
        version: SNAPSHOT_VERSION,
        characters: characters.to_vec(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn import_roster(path: impl AsRef<Path>) -> Result<Vec<Character>, SnapshotError> {
    let json = fs::read_to_string(path)?;
    let snapshot: RosterSnapshot = serde_json::from_str(&json)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Version {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    validate_characters(&snapshot.characters)?;
    Ok(snapshot.characters)
}

fn validate_characters(characters: &[Character]) -> Result<(), SnapshotError> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    for character in characters {
        if !seen.insert(character.id) {
            return Err(SnapshotError::Invalid(format!(
                "duplicate character id {}",
                character.id
            )));
        }
        if character.name.trim().is_empty() {
            return Err(SnapshotError::Invalid(format!(
                "character {} has an empty name",
                character.id
            )));
        }
        if character.power > POWER_CAP {
            return Err(SnapshotError::Invalid(format!(
                "character {} power {} exceeds {}",
                character.name, character.power, POWER_CAP
            )));
        }
        if let Some(stats) = character.stats {
            let fields = [
                ("strength", stats.strength),
                ("intelligence", stats.intelligence),
                ("stamina", stats.stamina),
                ("luck", stats.luck),
            ];
            for (field, value) in fields {
                if value > STAT_CAP {
                    return Err(SnapshotError::Invalid(format!(
                        "character {} {field} {value} exceeds {}",
                        character.name, STAT_CAP
                    )));
                }
            }
        }
    }
    Ok(())
}

fn validate_state(state: &GameState) -> Result<(), SnapshotError> {
    validate_characters(&state.characters)?;

    let mut seen: HashSet<Uuid> = HashSet::new();
    for quest in &state.quests {
        if !seen.insert(quest.id) {
            return Err(SnapshotError::Invalid(format!(
                "duplicate quest id {}",
                quest.id
            )));
        }
        if quest.status == QuestStatus::InProgress && quest.assignee_id.is_none() {
            return Err(SnapshotError::Invalid(format!(
                "in-progress quest {} has no assignee",
                quest.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterDraft, Role};
    use crate::quests::{Quest, QuestKind};
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chronicle_{tag}_{}.json", Uuid::new_v4()))
    }

    fn sample_state() -> GameState {
        let mut state = GameState::new();
        let hero = Character::from_draft(CharacterDraft::new("Aster", Role::Hero));
        let villain = Character::from_draft(CharacterDraft::new("Vex", Role::Villain));
        state.quests.push(Quest::post(
            QuestKind::Subjugation,
            &villain,
            3000,
            None,
        ));
        state.characters.push(hero);
        state.characters.push(villain);
        state.day = 12;
        state.ledger.heroes.credit(500);
        state
    }

    #[test]
    fn test_snapshot_round_trip() {
        let path = temp_path("roundtrip");
        let state = sample_state();
        save_snapshot(&path, &state).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.day, 12);
        assert_eq!(loaded.characters.len(), 2);
        assert_eq!(loaded.quests.len(), 1);
        assert_eq!(loaded.ledger.heroes.money, 500);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let path = temp_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_snapshot(&path),
            Err(SnapshotError::Parse(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_wrong_version_is_rejected() {
        let path = temp_path("version");
        let state = sample_state();
        save_snapshot(&path, &state).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value["version"] = serde_json::json!(99);
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        assert!(matches!(
            load_snapshot(&path),
            Err(SnapshotError::Version { found: 99, .. })
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_duplicate_character_id_is_rejected() {
        let path = temp_path("dup");
        let mut state = sample_state();
        let clone = state.characters[0].clone();
        state.characters.push(clone);
        save_snapshot(&path, &state).unwrap();

        assert!(matches!(
            load_snapshot(&path),
            Err(SnapshotError::Invalid(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_power_is_rejected() {
        let path = temp_path("power");
        let mut state = sample_state();
        state.characters[0].power = 250;
        save_snapshot(&path, &state).unwrap();

        assert!(matches!(
            load_snapshot(&path),
            Err(SnapshotError::Invalid(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_roster_export_import() {
        let path = temp_path("roster");
        let state = sample_state();
        export_roster(&path, &state.characters).unwrap();

        let roster = import_roster(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Aster");
        let _ = fs::remove_file(&path);
    }
}
