//! Battle data types. A battle is transient: it lives only between
//! `advance_day` starting it and the commit that folds its result back
//! into the roster.

use uuid::Uuid;

use crate::character::{Character, Stats};
use crate::core::constants::BATTLE_START_HP;
use crate::core::log::LogEntry;

/// Result of one attack after all modifiers. Crit and glancing are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: u32,
    pub is_crit: bool,
    pub is_glancing: bool,
}

/// The numbers the damage formula reads, detached from the roster entry.
#[derive(Debug, Clone, Copy)]
pub struct CombatProfile {
    pub stats: Stats,
    pub power: u32,
}

impl From<&Character> for CombatProfile {
    fn from(character: &Character) -> Self {
        Self {
            stats: character.effective_stats(),
            power: character.power,
        }
    }
}

/// One combatant. Battle HP is a separate track from roster status; both
/// sides start at the same HP regardless of role.
#[derive(Debug, Clone)]
pub struct BattleSide {
    pub id: Uuid,
    pub name: String,
    pub stats: Stats,
    pub power: u32,
    pub hp: i32,
}

impl BattleSide {
    pub fn new(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            stats: character.effective_stats(),
            power: character.power,
            hp: BATTLE_START_HP,
        }
    }

    pub fn profile(&self) -> CombatProfile {
        CombatProfile {
            stats: self.stats,
            power: self.power,
        }
    }

    pub fn is_standing(&self) -> bool {
        self.hp > 0
    }
}

/// Final result handed back to the orchestrator.
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub winner_id: Uuid,
    pub winner_name: String,
    pub loser_id: Uuid,
    pub loser_name: String,
    pub turns: u32,
}

/// In-flight battle. `first` acts on even turns, `second` on odd ones.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub day: u32,
    pub first: BattleSide,
    pub second: BattleSide,
    pub turn: u32,
    pub transcript: Vec<LogEntry>,
}

impl BattleState {
    pub fn new(day: u32, first: &Character, second: &Character) -> Self {
        Self {
            day,
            first: BattleSide::new(first),
            second: BattleSide::new(second),
            turn: 0,
            transcript: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        !self.first.is_standing() || !self.second.is_standing()
    }
}
