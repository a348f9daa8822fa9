//! Simulation runner driving the real `Game` orchestrator.
//!
//! Each run seeds a fresh default cast, advances the configured number of
//! days with battles skipped, and reads the final state for statistics,
//! so simulated balance matches actual gameplay behavior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::{CharacterDraft, Personality, Role, Stats, Status};
use crate::core::game::{DayAdvance, Game};
use crate::quests::{QuestKind, QuestStatus};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut seed_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);
    for run_idx in 0..config.num_runs {
        let run_seed = seed_rng.gen::<u64>();
        let stats = simulate_single_run(config, run_seed);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - battles {}, hero wins {}, deaths {}, quests {}/{}",
                run_idx + 1,
                config.num_runs,
                stats.battles,
                stats.hero_wins,
                stats.deaths,
                stats.quests_completed,
                stats.quests_completed + stats.quests_failed
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// The standard cast used for balance runs: a handful of each role with
/// differentiated stats and personalities so every engine gets exercised.
pub fn default_cast() -> Vec<CharacterDraft> {
    let mut cast = Vec::new();

    let heroes = [
        ("Aster", 88, Stats { strength: 90, intelligence: 50, stamina: 95, luck: 50 }, Personality::Righteous),
        ("Gale", 75, Stats { strength: 70, intelligence: 80, stamina: 65, luck: 60 }, Personality::Greedy),
        ("Nocturne", 70, Stats { strength: 60, intelligence: 85, stamina: 60, luck: 75 }, Personality::Lazy),
    ];
    for (name, power, stats, tag) in heroes {
        let mut draft = CharacterDraft::new(name, Role::Hero);
        draft.power = power;
        draft.stats = Some(stats);
        draft.personality.push(tag);
        cast.push(draft);
    }

    let villains = [
        ("Vex", 80, Stats { strength: 85, intelligence: 70, stamina: 75, luck: 40 }, Personality::Cruel),
        ("Mordant", 72, Stats { strength: 65, intelligence: 90, stamina: 60, luck: 55 }, Personality::Greedy),
        ("Hollow", 65, Stats { strength: 70, intelligence: 55, stamina: 70, luck: 65 }, Personality::Cruel),
    ];
    for (name, power, stats, tag) in villains {
        let mut draft = CharacterDraft::new(name, Role::Villain);
        draft.power = power;
        draft.stats = Some(stats);
        draft.personality.push(tag);
        cast.push(draft);
    }

    for name in ["Mrs. Kim", "Baker", "Clerk", "Busker"] {
        cast.push(CharacterDraft::new(name, Role::Civilian));
    }

    cast
}

fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut game = Game::new(seed);
    for draft in default_cast() {
        game.add_character(draft);
    }

    if config.with_quests {
        let villain_id = game.state().living(Role::Villain).map(|c| c.id).next();
        if let Some(id) = villain_id {
            game.post_quest(QuestKind::Subjugation, id, 5000, None);
        }
        let civilian_id = game.state().living(Role::Civilian).map(|c| c.id).next();
        if let Some(id) = civilian_id {
            game.post_quest(QuestKind::Escort, id, 2000, None);
        }
    }

    let mut stats = RunStats {
        days: config.days_per_run,
        ..RunStats::default()
    };

    for _ in 0..config.days_per_run {
        if let DayAdvance::BattleStarted { .. } = game.advance_day() {
            if let Some(report) = game.skip_battle() {
                stats.battles += 1;
                match game.state().character(report.winner_id).map(|c| c.role) {
                    Some(Role::Hero) => stats.hero_wins += 1,
                    Some(Role::Villain) => stats.villain_wins += 1,
                    _ => {}
                }
            }
        }
    }

    let state = game.state();
    stats.deaths = state
        .characters
        .iter()
        .filter(|c| c.status == Status::Dead)
        .count() as u32;
    stats.quests_completed = state
        .quests
        .iter()
        .filter(|q| q.status == QuestStatus::Completed)
        .count() as u32;
    stats.quests_failed = state
        .quests
        .iter()
        .filter(|q| q.status == QuestStatus::Failed)
        .count() as u32;
    stats.log_entries = state.journal.len() as u32;
    stats
}
