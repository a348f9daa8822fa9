//! Daily quest tick: match open quests to willing candidates, then push
//! every in-progress quest one day forward.
//!
//! Pure over `(day, quests, characters, rng)`: returns the updated quest
//! list plus logs and faction payouts for the orchestrator to commit.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::character::{Character, Personality, Role, Status};
use crate::core::constants::*;
use crate::core::log::{LogEntry, LogKind};
use crate::narrative::pools::{
    ASSASSINATION_PROGRESS_LINES, ESCORT_PROGRESS_LINES, SUBJUGATION_PROGRESS_LINES,
};
use crate::narrative::relationship::affinity_between;
use crate::narrative::template::render;
use crate::quests::types::{Quest, QuestKind, QuestStatus};

/// Reward owed to a faction's pool when a quest completes.
#[derive(Debug, Clone, Copy)]
pub struct Payout {
    pub faction: Role,
    pub amount: u32,
}

/// Everything one tick produced; nothing in the input was mutated.
#[derive(Debug, Clone, Default)]
pub struct QuestTick {
    pub quests: Vec<Quest>,
    pub logs: Vec<LogEntry>,
    pub payouts: Vec<Payout>,
}

impl QuestTick {
    fn log(&mut self, day: u32, message: String) {
        self.logs.push(LogEntry::new(day, message, LogKind::Quest));
    }
}

/// Acceptance probability for a candidate, before the dice roll.
/// Personality and reward tiers stack additively on the base rate and the
/// result is clamped to a real probability.
pub fn acceptance_probability(quest: &Quest, candidate: &Character) -> f64 {
    let mut p = QUEST_BASE_ACCEPTANCE;

    for trait_tag in &candidate.personality {
        match trait_tag {
            Personality::Greedy => {
                p += if quest.reward >= QUEST_GREEDY_REWARD_FLOOR {
                    QUEST_GREEDY_BONUS
                } else {
                    QUEST_GREEDY_PENALTY
                };
            }
            Personality::Righteous => {
                if quest.kind != QuestKind::Assassination {
                    p += QUEST_RIGHTEOUS_BONUS;
                }
            }
            Personality::Lazy => p += QUEST_LAZY_PENALTY,
            Personality::Cruel => {
                if matches!(quest.kind, QuestKind::Assassination | QuestKind::Subjugation) {
                    p += QUEST_CRUEL_BONUS;
                }
            }
            Personality::Timid => {}
        }
    }

    if quest.reward >= QUEST_HIGH_REWARD_FLOOR {
        p += QUEST_HIGH_REWARD_BONUS;
    } else if quest.reward < QUEST_LOW_REWARD_CEILING {
        p += QUEST_LOW_REWARD_PENALTY;
    }

    p.clamp(0.0, 1.0)
}

/// Whether this candidate takes the quest. Hard gates first (condition,
/// self-target, role fit, friendship with the target), then the
/// probability roll.
pub fn check_quest_acceptance(
    quest: &Quest,
    candidate: &Character,
    target: Option<&Character>,
    rng: &mut impl Rng,
) -> bool {
    match candidate.status {
        Status::Dead | Status::Retired => return false,
        Status::Normal | Status::Injured => {}
    }
    if candidate.id == quest.target_id {
        return false;
    }

    let role_fits = match quest.kind {
        QuestKind::Subjugation => candidate.role != Role::Civilian,
        QuestKind::Escort => candidate.role == Role::Hero,
        QuestKind::Assassination => candidate.role == Role::Villain,
    };
    if !role_fits {
        return false;
    }

    if let Some(target) = target {
        if let Some(affinity) = affinity_between(candidate, target) {
            if affinity > QUEST_FRIEND_AFFINITY_CUTOFF {
                return false;
            }
        }
    }

    rng.gen::<f64>() < acceptance_probability(quest, candidate)
}

fn progress_pool(kind: QuestKind) -> &'static [&'static str] {
    match kind {
        QuestKind::Subjugation => SUBJUGATION_PROGRESS_LINES,
        QuestKind::Assassination => ASSASSINATION_PROGRESS_LINES,
        QuestKind::Escort => ESCORT_PROGRESS_LINES,
    }
}

/// One full quest tick: matching pass over open quests, then a progress
/// pass over everything in flight. Terminal quests are never revisited.
pub fn run_daily_quests(
    day: u32,
    quests: &[Quest],
    characters: &[Character],
    rng: &mut impl Rng,
) -> QuestTick {
    let mut out = QuestTick {
        quests: quests.to_vec(),
        ..QuestTick::default()
    };

    // Matching pass. A character can hold at most one active quest.
    for i in 0..out.quests.len() {
        if out.quests[i].status != QuestStatus::Open {
            continue;
        }

        let assigned: HashSet<Uuid> = out
            .quests
            .iter()
            .filter(|q| !q.status.is_terminal())
            .filter_map(|q| q.assignee_id)
            .collect();
        let target = characters.iter().find(|c| c.id == out.quests[i].target_id);

        let mut candidates: Vec<&Character> = characters
            .iter()
            .filter(|c| c.is_alive() && !assigned.contains(&c.id))
            .collect();
        candidates.shuffle(rng);

        for candidate in candidates {
            if check_quest_acceptance(&out.quests[i], candidate, target, rng) {
                let quest = &mut out.quests[i];
                quest.status = QuestStatus::InProgress;
                quest.assignee_id = Some(candidate.id);
                quest.assignee_name = Some(candidate.name.clone());
                let message = format!(
                    "{} takes on the {} contract against {}.",
                    candidate.name,
                    quest.kind.label(),
                    quest.target_name
                );
                out.log(day, message);
                break;
            }
        }
    }

    // Progress pass.
    for i in 0..out.quests.len() {
        if out.quests[i].status != QuestStatus::InProgress {
            continue;
        }

        let assignee = out.quests[i]
            .assignee_id
            .and_then(|id| characters.iter().find(|c| c.id == id));
        let Some(assignee) = assignee.filter(|c| c.is_alive()) else {
            let quest = &mut out.quests[i];
            quest.status = QuestStatus::Failed;
            let message = format!(
                "The {} contract against {} is abandoned; its taker is gone.",
                quest.kind.label(),
                quest.target_name
            );
            out.log(day, message);
            continue;
        };
        let assignee_name = assignee.name.clone();
        let assignee_role = assignee.role;

        let target_alive = characters
            .iter()
            .find(|c| c.id == out.quests[i].target_id)
            .map(|c| c.is_alive())
            .unwrap_or(false);

        match out.quests[i].kind {
            QuestKind::Subjugation | QuestKind::Assassination => {
                if !target_alive {
                    let quest = &mut out.quests[i];
                    quest.status = QuestStatus::Completed;
                    let payout = Payout {
                        faction: assignee_role,
                        amount: quest.reward,
                    };
                    let message = format!(
                        "{} closes the {} contract: {} is no more. ({} gold)",
                        assignee_name,
                        quest.kind.label(),
                        quest.target_name,
                        quest.reward
                    );
                    out.payouts.push(payout);
                    out.log(day, message);
                    continue;
                }
            }
            QuestKind::Escort => {
                if !target_alive {
                    let quest = &mut out.quests[i];
                    quest.status = QuestStatus::Failed;
                    let message = format!(
                        "The escort of {} has failed; the charge is dead.",
                        quest.target_name
                    );
                    out.log(day, message);
                    continue;
                }
                let quest = &mut out.quests[i];
                let remaining = quest.duration.unwrap_or(0).saturating_sub(1);
                quest.duration = Some(remaining);
                if remaining == 0 {
                    quest.status = QuestStatus::Completed;
                    let payout = Payout {
                        faction: assignee_role,
                        amount: quest.reward,
                    };
                    let message = format!(
                        "{} delivers {} safely. ({} gold)",
                        assignee_name, quest.target_name, quest.reward
                    );
                    out.payouts.push(payout);
                    out.log(day, message);
                    continue;
                }
            }
        }

        // Still in flight: at most one flavor line per quest per day.
        if rng.gen::<f64>() < QUEST_PROGRESS_FLAVOR_CHANCE {
            let template = progress_pool(out.quests[i].kind)
                .choose(rng)
                .copied()
                .unwrap_or(SUBJUGATION_PROGRESS_LINES[0]);
            let line = render(
                template,
                &[
                    ("assignee", assignee_name.as_str()),
                    ("target", out.quests[i].target_name.as_str()),
                ],
            );
            out.log(day, line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterDraft, Relationship};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make(name: &str, role: Role) -> Character {
        Character::from_draft(CharacterDraft::new(name, role))
    }

    fn subjugation(target: &Character, reward: u32) -> Quest {
        Quest::post(QuestKind::Subjugation, target, reward, None)
    }

    #[test]
    fn test_righteous_high_reward_probability() {
        let villain = make("Vex", Role::Villain);
        let mut hero = make("Aster", Role::Hero);
        hero.personality.push(Personality::Righteous);

        let quest = subjugation(&villain, 5000);
        let p = acceptance_probability(&quest, &hero);
        assert!((p - 0.8).abs() < 1e-9, "expected 0.8, got {p}");
    }

    #[test]
    fn test_acceptance_probability_is_clamped() {
        let villain = make("Vex", Role::Villain);
        let mut zealot = make("Saint", Role::Hero);
        zealot.personality = vec![
            Personality::Righteous,
            Personality::Greedy,
            Personality::Cruel,
        ];
        let rich_quest = subjugation(&villain, 9000);
        assert_eq!(acceptance_probability(&rich_quest, &zealot), 1.0);

        let mut sloth = make("Sloth", Role::Hero);
        sloth.personality = vec![Personality::Lazy, Personality::Lazy, Personality::Lazy];
        let poor_quest = subjugation(&villain, 100);
        assert!(acceptance_probability(&poor_quest, &sloth) >= 0.0);
    }

    #[test]
    fn test_role_gates() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let villain_target = make("Vex", Role::Villain);
        let hero_target = make("Mark", Role::Hero);
        let civilian_target = make("Witness", Role::Civilian);

        let civilian = make("Baker", Role::Civilian);
        let hero = make("Aster", Role::Hero);
        let villain = make("Grim", Role::Villain);

        let subj = subjugation(&villain_target, 5000);
        for _ in 0..50 {
            assert!(!check_quest_acceptance(&subj, &civilian, None, &mut rng));
        }

        let escort = Quest::post(QuestKind::Escort, &civilian_target, 5000, None);
        for _ in 0..50 {
            assert!(!check_quest_acceptance(&escort, &villain, None, &mut rng));
        }

        let hit = Quest::post(QuestKind::Assassination, &hero_target, 9000, None);
        for _ in 0..50 {
            assert!(!check_quest_acceptance(&hit, &hero, None, &mut rng));
        }
    }

    #[test]
    fn test_dead_retired_and_self_target_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let villain = make("Vex", Role::Villain);
        let quest = subjugation(&villain, 9000);

        let mut dead = make("Ghost", Role::Hero);
        dead.status = Status::Dead;
        let mut retired = make("Elder", Role::Hero);
        retired.status = Status::Retired;

        for _ in 0..50 {
            assert!(!check_quest_acceptance(&quest, &dead, None, &mut rng));
            assert!(!check_quest_acceptance(&quest, &retired, None, &mut rng));
            assert!(!check_quest_acceptance(&quest, &villain, Some(&villain), &mut rng));
        }
    }

    #[test]
    fn test_friend_of_target_refuses() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let villain = make("Vex", Role::Villain);
        let mut friend = make("Aster", Role::Hero);
        friend.relationships.push(Relationship {
            target_id: villain.id,
            target_name: villain.name.clone(),
            kind: "friend".to_string(),
            is_mutual: false,
            affinity: Some(55),
        });

        let quest = subjugation(&villain, 9000);
        for _ in 0..100 {
            assert!(!check_quest_acceptance(&quest, &friend, Some(&villain), &mut rng));
        }
    }

    #[test]
    fn test_matching_assigns_within_bounded_ticks() {
        // p = 0.8 per tick for a lone righteous hero; twenty ticks without
        // an acceptance would be a broken engine, not bad luck.
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let villain = make("Vex", Role::Villain);
        let mut hero = make("Aster", Role::Hero);
        hero.personality.push(Personality::Righteous);
        let roster = vec![hero, villain.clone()];

        let mut quests = vec![subjugation(&villain, 5000)];
        for day in 1..=20 {
            let tick = run_daily_quests(day, &quests, &roster, &mut rng);
            quests = tick.quests;
            if quests[0].status == QuestStatus::InProgress {
                assert_eq!(quests[0].assignee_name.as_deref(), Some("Aster"));
                return;
            }
        }
        panic!("quest never accepted in 20 ticks");
    }

    #[test]
    fn test_terminal_quests_stay_terminal() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let villain = make("Vex", Role::Villain);
        let hero = make("Aster", Role::Hero);
        let roster = vec![hero.clone(), villain.clone()];

        let mut done = subjugation(&villain, 5000);
        done.status = QuestStatus::Completed;
        done.assignee_id = Some(hero.id);
        done.assignee_name = Some(hero.name.clone());
        let mut failed = subjugation(&villain, 5000);
        failed.status = QuestStatus::Failed;

        for day in 1..=10 {
            let tick = run_daily_quests(day, &[done.clone(), failed.clone()], &roster, &mut rng);
            assert_eq!(tick.quests[0].status, QuestStatus::Completed);
            assert_eq!(tick.quests[1].status, QuestStatus::Failed);
            assert!(tick.payouts.is_empty());
        }
    }

    #[test]
    fn test_subjugation_completes_when_target_dies() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut villain = make("Vex", Role::Villain);
        let hero = make("Aster", Role::Hero);

        let mut quest = subjugation(&villain, 3000);
        quest.status = QuestStatus::InProgress;
        quest.assignee_id = Some(hero.id);
        quest.assignee_name = Some(hero.name.clone());

        villain.status = Status::Dead;
        let roster = vec![hero, villain];
        let tick = run_daily_quests(3, &[quest], &roster, &mut rng);

        assert_eq!(tick.quests[0].status, QuestStatus::Completed);
        assert_eq!(tick.payouts.len(), 1);
        assert_eq!(tick.payouts[0].faction, Role::Hero);
        assert_eq!(tick.payouts[0].amount, 3000);
    }

    #[test]
    fn test_quest_fails_when_assignee_dies() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let villain = make("Vex", Role::Villain);
        let mut hero = make("Aster", Role::Hero);

        let mut quest = subjugation(&villain, 3000);
        quest.status = QuestStatus::InProgress;
        quest.assignee_id = Some(hero.id);
        quest.assignee_name = Some(hero.name.clone());

        hero.status = Status::Dead;
        let roster = vec![hero, villain];
        let tick = run_daily_quests(3, &[quest], &roster, &mut rng);

        assert_eq!(tick.quests[0].status, QuestStatus::Failed);
        assert!(tick.payouts.is_empty());
    }

    #[test]
    fn test_escort_counts_down_and_completes() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let witness = make("Witness", Role::Civilian);
        let hero = make("Aster", Role::Hero);

        let mut quest = Quest::post(QuestKind::Escort, &witness, 2000, Some(3));
        quest.status = QuestStatus::InProgress;
        quest.assignee_id = Some(hero.id);
        quest.assignee_name = Some(hero.name.clone());

        let roster = vec![hero, witness];
        let mut quests = vec![quest];
        for day in 1..=2 {
            let tick = run_daily_quests(day, &quests, &roster, &mut rng);
            quests = tick.quests;
            assert_eq!(quests[0].status, QuestStatus::InProgress);
            assert!(tick.payouts.is_empty());
        }
        let tick = run_daily_quests(3, &quests, &roster, &mut rng);
        assert_eq!(tick.quests[0].status, QuestStatus::Completed);
        assert_eq!(tick.quests[0].duration, Some(0));
        assert_eq!(tick.payouts.len(), 1);
        assert_eq!(tick.payouts[0].amount, 2000);
    }

    #[test]
    fn test_escort_fails_on_target_death() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut witness = make("Witness", Role::Civilian);
        let hero = make("Aster", Role::Hero);

        let mut quest = Quest::post(QuestKind::Escort, &witness, 2000, Some(3));
        quest.status = QuestStatus::InProgress;
        quest.assignee_id = Some(hero.id);
        quest.assignee_name = Some(hero.name.clone());

        witness.status = Status::Dead;
        let roster = vec![hero, witness];
        let tick = run_daily_quests(2, &[quest], &roster, &mut rng);
        assert_eq!(tick.quests[0].status, QuestStatus::Failed);
        assert!(tick.payouts.is_empty());
    }
}
