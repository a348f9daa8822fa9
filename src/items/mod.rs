//! Item effect contract and faction resources.
//!
//! The item catalog (names, prices, art) lives outside the core; the
//! engine only knows the effect kinds and a numeric value.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::{Character, Role, Stats, Status};
use crate::core::constants::{POWER_CAP, STAT_CAP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    Heal,
    BuffStrength,
    BuffLuck,
    GambleMoney,
    Equipment,
}

/// Money and item stock for one faction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactionResources {
    pub money: u32,
    #[serde(default)]
    pub inventory: BTreeMap<String, u32>,
}

impl FactionResources {
    pub fn credit(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    pub fn debit(&mut self, amount: u32) -> bool {
        if self.money >= amount {
            self.money -= amount;
            true
        } else {
            false
        }
    }

    pub fn add_item(&mut self, item_id: &str, count: u32) {
        *self.inventory.entry(item_id.to_string()).or_insert(0) += count;
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.get(item_id).is_some_and(|count| *count > 0)
    }

    /// Removes one unit if in stock.
    pub fn take_item(&mut self, item_id: &str) -> bool {
        match self.inventory.get_mut(item_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.inventory.remove(item_id);
                }
                true
            }
            _ => false,
        }
    }
}

/// Per-role resource pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactionLedger {
    pub heroes: FactionResources,
    pub villains: FactionResources,
    pub civilians: FactionResources,
}

impl FactionLedger {
    pub fn for_role(&self, role: Role) -> &FactionResources {
        match role {
            Role::Hero => &self.heroes,
            Role::Villain => &self.villains,
            Role::Civilian => &self.civilians,
        }
    }

    pub fn for_role_mut(&mut self, role: Role) -> &mut FactionResources {
        match role {
            Role::Hero => &mut self.heroes,
            Role::Villain => &mut self.villains,
            Role::Civilian => &mut self.civilians,
        }
    }
}

/// What an item actually did, for journal narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemApplied {
    Healed,
    StatRaised(&'static str, u32),
    PowerRaised(u32),
    MoneyWon(u32),
    MoneyLost(u32),
}

/// Applies one item effect to a character and their faction's funds.
/// `None` means nothing happened (dead target, or healing the unhurt);
/// the caller keeps the item in that case.
pub fn apply_item_effect(
    target: &mut Character,
    effect: ItemEffect,
    value: u32,
    funds: &mut FactionResources,
    rng: &mut impl Rng,
) -> Option<ItemApplied> {
    if !target.is_alive() {
        return None;
    }

    match effect {
        ItemEffect::Heal => {
            if target.status != Status::Injured {
                return None;
            }
            target.status = Status::Normal;
            Some(ItemApplied::Healed)
        }
        ItemEffect::BuffStrength => {
            let stats = target.stats.get_or_insert_with(Stats::default);
            stats.strength = (stats.strength + value).min(STAT_CAP);
            Some(ItemApplied::StatRaised("strength", value))
        }
        ItemEffect::BuffLuck => {
            let stats = target.stats.get_or_insert_with(Stats::default);
            stats.luck = (stats.luck + value).min(STAT_CAP);
            Some(ItemApplied::StatRaised("luck", value))
        }
        ItemEffect::GambleMoney => {
            if rng.gen_bool(0.5) {
                funds.credit(value);
                Some(ItemApplied::MoneyWon(value))
            } else {
                let lost = value.min(funds.money);
                funds.money -= lost;
                Some(ItemApplied::MoneyLost(lost))
            }
        }
        ItemEffect::Equipment => {
            target.power = (target.power + value).min(POWER_CAP);
            Some(ItemApplied::PowerRaised(value))
        }
    }
}
