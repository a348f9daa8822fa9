//! Canonical persisted game state. Everything a snapshot captures lives
//! here; transient battle state deliberately does not.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::{Character, Role};
use crate::core::log::Journal;
use crate::items::FactionLedger;
use crate::quests::Quest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub day: u32,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub journal: Journal,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub ledger: FactionLedger,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            day: 1,
            characters: Vec::new(),
            journal: Journal::new(),
            quests: Vec::new(),
            ledger: FactionLedger::default(),
        }
    }

    pub fn character(&self, id: Uuid) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: Uuid) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn living(&self, role: Role) -> impl Iterator<Item = &Character> + '_ {
        self.characters
            .iter()
            .filter(move |c| c.role == role && c.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterDraft, Status};

    #[test]
    fn test_new_state_starts_on_day_one() {
        let state = GameState::new();
        assert_eq!(state.day, 1);
        assert!(state.characters.is_empty());
        assert!(state.journal.is_empty());
    }

    #[test]
    fn test_living_filters_role_and_death() {
        let mut state = GameState::new();
        state
            .characters
            .push(Character::from_draft(CharacterDraft::new("A", Role::Hero)));
        let mut dead_hero = Character::from_draft(CharacterDraft::new("B", Role::Hero));
        dead_hero.status = Status::Dead;
        state.characters.push(dead_hero);
        state
            .characters
            .push(Character::from_draft(CharacterDraft::new(
                "C",
                Role::Villain,
            )));

        assert_eq!(state.living(Role::Hero).count(), 1);
        assert_eq!(state.living(Role::Villain).count(), 1);
        assert_eq!(state.living(Role::Civilian).count(), 0);
    }
}
