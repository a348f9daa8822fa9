//! Daily simulation pass: recovery, villain harassment, ambient flavor.
//!
//! Pure over `(day, characters, exclude, rng)`. The input roster is
//! cloned; the living filter is re-evaluated before each phase so a
//! character killed mid-pass never shows up later the same day.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::character::{Character, Role, Status};
use crate::core::constants::{
    AMBIENT_EVENT_CHANCE, HARASSMENT_CHANCE, HARASSMENT_LETHAL_CHANCE, RECOVERY_CHANCE,
};
use crate::core::log::{LogEntry, LogKind};
use crate::narrative::pools::{
    ambient_pool, HARASSMENT_KILL_LINES, HARASSMENT_LINES, RECOVERY_LINES,
};
use crate::narrative::template::render;

#[derive(Debug, Clone, Default)]
pub struct DailyOutcome {
    pub characters: Vec<Character>,
    pub logs: Vec<LogEntry>,
}

fn pick_line(pool: &[&'static str], rng: &mut impl Rng) -> &'static str {
    pool.choose(rng).copied().unwrap_or("{name}")
}

/// Runs the three daily phases over everyone not in `exclude` (battle
/// participants sit the day out). Returns the updated roster and the
/// day's logs without touching the input.
pub fn process_daily_events(
    day: u32,
    characters: &[Character],
    exclude: &[Uuid],
    rng: &mut impl Rng,
) -> DailyOutcome {
    let mut out = DailyOutcome {
        characters: characters.to_vec(),
        logs: Vec::new(),
    };
    let excluded = |id: Uuid| exclude.contains(&id);

    // Phase 1: recovery.
    for i in 0..out.characters.len() {
        let c = &out.characters[i];
        if c.status != Status::Injured || excluded(c.id) {
            continue;
        }
        if rng.gen::<f64>() < RECOVERY_CHANCE {
            let line = render(pick_line(RECOVERY_LINES, rng), &[("name", &c.name)]);
            out.characters[i].status = Status::Normal;
            out.logs.push(LogEntry::new(day, line, LogKind::Info));
        }
    }

    // Phase 2: villain harassment. Each villain acts at most once; the
    // victim list is rebuilt per villain so a fresh corpse is never
    // targeted again today.
    let villain_ids: Vec<Uuid> = out
        .characters
        .iter()
        .filter(|c| c.role == Role::Villain && c.status == Status::Normal && !excluded(c.id))
        .map(|c| c.id)
        .collect();
    for villain_id in villain_ids {
        if rng.gen::<f64>() >= HARASSMENT_CHANCE {
            continue;
        }
        let victim_id = {
            let victims: Vec<Uuid> = out
                .characters
                .iter()
                .filter(|c| {
                    c.role == Role::Civilian && c.status == Status::Normal && !excluded(c.id)
                })
                .map(|c| c.id)
                .collect();
            match victims.choose(rng) {
                Some(id) => *id,
                None => continue,
            }
        };

        let villain_name = match out.characters.iter().find(|c| c.id == villain_id) {
            Some(v) => v.name.clone(),
            None => continue,
        };
        let victim_name = match out.characters.iter().find(|c| c.id == victim_id) {
            Some(v) => v.name.clone(),
            None => continue,
        };

        let line = render(
            pick_line(HARASSMENT_LINES, rng),
            &[("villain", &villain_name), ("civilian", &victim_name)],
        );
        out.logs.push(LogEntry::new(day, line, LogKind::Event));

        if rng.gen::<f64>() < HARASSMENT_LETHAL_CHANCE {
            if let Some(victim) = out.characters.iter_mut().find(|c| c.id == victim_id) {
                victim.status = Status::Dead;
            }
            if let Some(villain) = out.characters.iter_mut().find(|c| c.id == villain_id) {
                villain.kills += 1;
            }
            let line = render(
                pick_line(HARASSMENT_KILL_LINES, rng),
                &[("villain", &villain_name), ("civilian", &victim_name)],
            );
            out.logs.push(LogEntry::new(day, line, LogKind::Death));
        }
    }

    // Phase 3: ambient flavor, 20% per living character.
    for i in 0..out.characters.len() {
        let c = &out.characters[i];
        if !c.is_alive() || excluded(c.id) {
            continue;
        }
        if rng.gen::<f64>() < AMBIENT_EVENT_CHANCE {
            let line = render(pick_line(ambient_pool(c.role), rng), &[("name", &c.name)]);
            out.logs.push(LogEntry::new(day, line, LogKind::Event));
        }
    }

    out
}
