//! Day orchestrator. `Game` is the single commit point: the battle,
//! quest, and daily engines all return new data, and only this module
//! folds their results into the owned `GameState`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::character::{Character, CharacterDraft, Housing, Role, Status};
use crate::combat::logic as combat_logic;
use crate::combat::types::{BattleReport, BattleState};
use crate::core::constants::{
    BATTLE_CHANCE, BATTLE_LOG_TAIL, LOSER_DEATH_CHANCE, POWER_CAP, WINNER_POWER_GAIN,
};
use crate::core::game_state::GameState;
use crate::core::log::LogKind;
use crate::core::tick::process_daily_events;
use crate::items::{apply_item_effect, ItemApplied, ItemEffect};
use crate::narrative::relationship::interaction_line;
use crate::quests::logic::run_daily_quests;
use crate::quests::{Quest, QuestKind};

/// What `advance_day` did. A started battle holds the day open until the
/// host steps or skips it to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAdvance {
    BattleStarted { first_id: Uuid, second_id: Uuid },
    DayCompleted { day: u32 },
}

pub struct Game {
    state: GameState,
    rng: StdRng,
    active_battle: Option<BattleState>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(), seed)
    }

    pub fn from_entropy() -> Self {
        Self {
            state: GameState::new(),
            rng: StdRng::from_entropy(),
            active_battle: None,
        }
    }

    /// Resumes from a loaded snapshot. Any battle that was in flight when
    /// the snapshot was taken is gone; the day restarts cleanly.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: StdRng::seed_from_u64(seed),
            active_battle: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn day(&self) -> u32 {
        self.state.day
    }

    pub fn active_battle(&self) -> Option<&BattleState> {
        self.active_battle.as_ref()
    }

    /// Advances the day. With at least one living hero and villain there
    /// is a coin-flip chance the day opens with a battle; the battle then
    /// blocks day completion until stepped or skipped. Repeated calls
    /// while a battle is pending return the same pairing.
    pub fn advance_day(&mut self) -> DayAdvance {
        if let Some(battle) = &self.active_battle {
            return DayAdvance::BattleStarted {
                first_id: battle.first.id,
                second_id: battle.second.id,
            };
        }

        let heroes: Vec<Uuid> = self.state.living(Role::Hero).map(|c| c.id).collect();
        let villains: Vec<Uuid> = self.state.living(Role::Villain).map(|c| c.id).collect();
        if !heroes.is_empty() && !villains.is_empty() && self.rng.gen::<f64>() < BATTLE_CHANCE {
            let picked = (
                heroes.choose(&mut self.rng).copied(),
                villains.choose(&mut self.rng).copied(),
            );
            if let (Some(hero_id), Some(villain_id)) = picked {
                if let (Some(hero), Some(villain)) = (
                    self.state.character(hero_id),
                    self.state.character(villain_id),
                ) {
                    let battle = BattleState::new(self.state.day, hero, villain);
                    let message = format!(
                        "{} and {} square off in the streets!",
                        hero.name, villain.name
                    );
                    let day = self.state.day;
                    self.state.journal.log(day, message, LogKind::Battle);
                    self.active_battle = Some(battle);
                    return DayAdvance::BattleStarted {
                        first_id: hero_id,
                        second_id: villain_id,
                    };
                }
            }
        }

        self.finish_day(&[])
    }

    /// Resolves one turn of the pending battle. Returns the report once
    /// the battle ends, at which point the day has been completed.
    pub fn step_battle(&mut self) -> Option<BattleReport> {
        let mut battle = self.active_battle.take()?;
        match combat_logic::step_battle(&mut battle, &mut self.rng) {
            Some(report) => {
                self.commit_battle(battle, &report);
                Some(report)
            }
            None => {
                self.active_battle = Some(battle);
                None
            }
        }
    }

    /// Fast-forwards the pending battle to its conclusion and completes
    /// the day. Turns already stepped interactively are kept, not replayed.
    pub fn skip_battle(&mut self) -> Option<BattleReport> {
        let mut battle = self.active_battle.take()?;
        let report = combat_logic::resolve_battle(&mut battle, &mut self.rng);
        self.commit_battle(battle, &report);
        Some(report)
    }

    fn commit_battle(&mut self, battle: BattleState, report: &BattleReport) {
        let day = self.state.day;

        let tail_start = battle.transcript.len().saturating_sub(BATTLE_LOG_TAIL);
        for entry in battle.transcript.into_iter().skip(tail_start) {
            self.state.journal.push(entry);
        }

        if let Some(winner) = self.state.character_mut(report.winner_id) {
            winner.battles_won += 1;
            winner.power = (winner.power + WINNER_POWER_GAIN).min(POWER_CAP);
        }

        if self.rng.gen::<f64>() < LOSER_DEATH_CHANCE {
            if let Some(loser) = self.state.character_mut(report.loser_id) {
                loser.status = Status::Dead;
            }
            if let Some(winner) = self.state.character_mut(report.winner_id) {
                winner.kills += 1;
            }
            let message = format!("{} has fallen to {}.", report.loser_name, report.winner_name);
            self.state.journal.log(day, message, LogKind::Death);
        } else {
            if let Some(loser) = self.state.character_mut(report.loser_id) {
                loser.status = Status::Injured;
            }
            let message = format!("{} limps away, badly hurt.", report.loser_name);
            self.state.journal.log(day, message, LogKind::Battle);
        }

        let message = format!(
            "{} stands victorious after {} turns.",
            report.winner_name, report.turns
        );
        self.state.journal.log(day, message, LogKind::Battle);

        self.finish_day(&[report.winner_id, report.loser_id]);
    }

    /// Daily pass, quest tick, then the day counter rolls over. Battle
    /// participants are excluded from the daily pass but not from quests.
    fn finish_day(&mut self, exclude: &[Uuid]) -> DayAdvance {
        let day = self.state.day;

        let daily = process_daily_events(day, &self.state.characters, exclude, &mut self.rng);
        self.state.characters = daily.characters;
        self.state.journal.extend(daily.logs);

        let tick = run_daily_quests(day, &self.state.quests, &self.state.characters, &mut self.rng);
        self.state.quests = tick.quests;
        self.state.journal.extend(tick.logs);
        for payout in tick.payouts {
            self.state
                .ledger
                .for_role_mut(payout.faction)
                .credit(payout.amount);
        }

        self.state.day += 1;
        let next = self.state.day;
        self.state
            .journal
            .log(next, format!("Day {next} begins."), LogKind::Info);

        DayAdvance::DayCompleted { day }
    }

    /// One narrated interaction between two roster members, resolved
    /// through their relationship (or lack of one).
    pub fn interaction_between(&mut self, actor_id: Uuid, target_id: Uuid) -> Option<String> {
        let actor = self.state.character(actor_id)?;
        let target = self.state.character(target_id)?;
        Some(interaction_line(actor, target, &mut self.rng))
    }

    pub fn add_character(&mut self, draft: CharacterDraft) -> Uuid {
        let character = Character::from_draft(draft);
        let id = character.id;
        let message = format!("{} arrives in the city.", character.name);
        let day = self.state.day;
        self.state.characters.push(character);
        self.state.journal.log(day, message, LogKind::Info);
        id
    }

    pub fn delete_character(&mut self, id: Uuid) -> bool {
        let before = self.state.characters.len();
        self.state.characters.retain(|c| c.id != id);
        self.state.characters.len() != before
    }

    /// Posts a quest against a living target. Escorts default their
    /// duration; dead or unknown targets make this a no-op.
    pub fn post_quest(
        &mut self,
        kind: QuestKind,
        target_id: Uuid,
        reward: u32,
        duration: Option<u32>,
    ) -> Option<Uuid> {
        let target = self.state.character(target_id).filter(|c| c.is_alive())?;
        let quest = Quest::post(kind, target, reward, duration);
        let id = quest.id;
        let message = format!(
            "A {} contract against {} is posted for {} gold.",
            kind.label(),
            quest.target_name,
            reward
        );
        let day = self.state.day;
        self.state.quests.push(quest);
        self.state.journal.log(day, message, LogKind::Quest);
        Some(id)
    }

    pub fn delete_quest(&mut self, id: Uuid) -> bool {
        let before = self.state.quests.len();
        self.state.quests.retain(|q| q.id != id);
        self.state.quests.len() != before
    }

    /// Applies one unit of `item_id` from the target's faction inventory.
    /// No stock, unknown target, a dead target, or an effect with nothing
    /// to do (healing the unhurt) all leave everything untouched; the item
    /// is only consumed when the effect actually applied.
    pub fn use_item(
        &mut self,
        target_id: Uuid,
        item_id: &str,
        effect: ItemEffect,
        value: u32,
    ) -> Option<ItemApplied> {
        let index = self
            .state
            .characters
            .iter()
            .position(|c| c.id == target_id)?;
        if !self.state.characters[index].is_alive() {
            return None;
        }
        let role = self.state.characters[index].role;
        let day = self.state.day;

        if !self.state.ledger.for_role(role).has_item(item_id) {
            return None;
        }

        let (characters, ledger) = (&mut self.state.characters, &mut self.state.ledger);
        let applied = apply_item_effect(
            &mut characters[index],
            effect,
            value,
            ledger.for_role_mut(role),
            &mut self.rng,
        )?;
        let name = characters[index].name.clone();
        self.state.ledger.for_role_mut(role).take_item(item_id);

        let message = match applied {
            ItemApplied::Healed => format!("{name}'s wounds are treated."),
            ItemApplied::StatRaised(stat, amount) => {
                format!("{name}'s {stat} rises by {amount}.")
            }
            ItemApplied::PowerRaised(amount) => {
                format!("{name} is outfitted with new gear (+{amount} power).")
            }
            ItemApplied::MoneyWon(amount) => format!("{name} gambles and wins {amount} gold."),
            ItemApplied::MoneyLost(amount) => format!("{name} gambles and loses {amount} gold."),
        };
        self.state.journal.log(day, message, LogKind::Intervention);
        Some(applied)
    }

    pub fn save_housing(&mut self, character_id: Uuid, housing: Housing) -> bool {
        match self.state.character_mut(character_id) {
            Some(character) => {
                character.housing = Some(housing);
                true
            }
            None => false,
        }
    }
}
