//! Battle lifecycle through the orchestrator: interactive stepping,
//! mid-fight skip, and the post-battle commit.

use chronicle::{CharacterDraft, DayAdvance, Game, LogKind, Role, Stats, Status};

fn fighter(name: &str, role: Role, power: u32) -> CharacterDraft {
    let mut draft = CharacterDraft::new(name, role);
    draft.power = power;
    draft.stats = Some(Stats {
        strength: 70,
        intelligence: 60,
        stamina: 70,
        luck: 50,
    });
    draft
}

fn arena(seed: u64) -> Game {
    let mut game = Game::new(seed);
    game.add_character(fighter("Aster", Role::Hero, 80));
    game.add_character(fighter("Vex", Role::Villain, 75));
    game
}

fn start_battle(game: &mut Game) -> bool {
    for _ in 0..100 {
        match game.advance_day() {
            DayAdvance::BattleStarted { .. } => return true,
            DayAdvance::DayCompleted { .. } => {}
        }
    }
    false
}

#[test]
fn stepping_resolves_a_battle_turn_by_turn() {
    let mut game = arena(21);
    assert!(start_battle(&mut game), "no battle in 100 days");
    let day = game.day();

    let mut steps = 0;
    let report = loop {
        steps += 1;
        assert!(steps <= 100, "battle failed to terminate");
        if let Some(report) = game.step_battle() {
            break report;
        }
        assert!(game.active_battle().is_some());
    };

    assert!(report.turns > 0);
    assert!(game.active_battle().is_none());
    assert_eq!(game.day(), day + 1, "battle completion finishes the day");
}

#[test]
fn skip_produces_a_full_commit() {
    let mut game = arena(22);
    assert!(start_battle(&mut game), "no battle in 100 days");
    let day = game.day();

    let report = game.skip_battle().expect("pending battle must resolve");

    let winner = game.state().character(report.winner_id).unwrap();
    assert_eq!(winner.battles_won, 1);
    assert!(winner.power >= 75 + 2 || winner.power == 100);

    let loser = game.state().character(report.loser_id).unwrap();
    assert!(
        loser.status == Status::Injured || loser.status == Status::Dead,
        "loser must be hurt or dead, was {:?}",
        loser.status
    );
    if loser.status == Status::Dead {
        assert_eq!(winner.kills, 1);
        assert!(game
            .state()
            .journal
            .entries_for_day(day)
            .any(|e| e.kind == LogKind::Death));
    }

    assert_eq!(game.day(), day + 1);
}

#[test]
fn skip_after_stepping_keeps_earlier_turns() {
    let mut game = arena(23);
    assert!(start_battle(&mut game), "no battle in 100 days");

    // Step a few turns interactively, then hand the rest to skip.
    let mut stepped = 0;
    for _ in 0..3 {
        if game.step_battle().is_some() {
            return; // finished early; covered by the other tests
        }
        stepped += 1;
    }
    let partial_turns = game.active_battle().expect("battle pending").turn;
    assert_eq!(partial_turns, stepped);

    let report = game.skip_battle().expect("pending battle must resolve");
    assert!(report.turns > stepped, "skip must continue, not restart");
}

#[test]
fn battle_transcript_tail_lands_in_journal() {
    let mut game = arena(24);
    assert!(start_battle(&mut game), "no battle in 100 days");
    let day = game.day();
    game.skip_battle().expect("pending battle must resolve");

    let battle_lines: Vec<&str> = game
        .state()
        .journal
        .entries_for_day(day)
        .filter(|e| e.kind == LogKind::Battle)
        .map(|e| e.message.as_str())
        .collect();

    // Opening line, at most six transcript lines, plus commit lines.
    assert!(battle_lines.len() >= 2);
    assert!(battle_lines.len() <= 9, "transcript not trimmed: {battle_lines:?}");
    assert!(battle_lines
        .iter()
        .any(|m| m.contains("damage)") || m.contains("victorious")));
}

#[test]
fn repeated_advance_calls_do_not_stack_battles() {
    let mut game = arena(25);
    assert!(start_battle(&mut game), "no battle in 100 days");

    let first = game.advance_day();
    let second = game.advance_day();
    assert_eq!(first, second);

    game.skip_battle();
    assert!(game.skip_battle().is_none(), "no battle left to skip");
}
