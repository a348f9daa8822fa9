//! Relationship-driven narrative selection.
//!
//! Lookup order for an interaction between two characters:
//! 1. the actor's own edge toward the target,
//! 2. the target's edge back, if it is marked mutual,
//! 3. otherwise the pair are strangers.
//!
//! Pool resolution then falls back (kind, role pair) -> (kind, COMMON) ->
//! (stranger, role pair) -> (stranger, COMMON) -> neutral default, so a
//! line is always produced.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::character::{Character, Role};
use crate::narrative::pools::{
    interaction_pool, COMMON_ROLE_KEY, NEUTRAL_INTERACTION, STRANGER_KIND,
};
use crate::narrative::template::render;

/// Canonical key for a role pairing, independent of argument order.
pub fn role_pair_key(a: Role, b: Role) -> &'static str {
    use Role::*;
    match (a, b) {
        (Hero, Hero) => "HERO_HERO",
        (Villain, Villain) => "VILLAIN_VILLAIN",
        (Civilian, Civilian) => "CIVILIAN_CIVILIAN",
        (Hero, Villain) | (Villain, Hero) => "HERO_VILLAIN",
        (Hero, Civilian) | (Civilian, Hero) => "HERO_CIVILIAN",
        (Villain, Civilian) | (Civilian, Villain) => "VILLAIN_CIVILIAN",
    }
}

/// Relationship kind from `actor` toward `target`.
pub fn relation_kind<'a>(actor: &'a Character, target: &'a Character) -> &'a str {
    if let Some(edge) = actor.relationship_to(target.id) {
        return &edge.kind;
    }
    if let Some(reverse) = target.relationship_to(actor.id) {
        if reverse.is_mutual {
            return &reverse.kind;
        }
    }
    STRANGER_KIND
}

/// Affinity between two characters, looked up with the same direct-then-
/// mutual-reverse order. `None` when no edge carries a value.
pub fn affinity_between(actor: &Character, target: &Character) -> Option<i32> {
    if let Some(edge) = actor.relationship_to(target.id) {
        if edge.affinity.is_some() {
            return edge.affinity;
        }
    }
    if let Some(reverse) = target.relationship_to(actor.id) {
        if reverse.is_mutual {
            return reverse.affinity;
        }
    }
    None
}

fn resolve_pool(kind: &str, role_key: &str) -> Option<&'static [&'static str]> {
    interaction_pool(kind, role_key)
        .or_else(|| interaction_pool(kind, COMMON_ROLE_KEY))
        .or_else(|| interaction_pool(STRANGER_KIND, role_key))
        .or_else(|| interaction_pool(STRANGER_KIND, COMMON_ROLE_KEY))
}

/// A rendered interaction line for the pair. Total: some line always
/// comes back, even for unknown relationship kinds.
pub fn interaction_line(actor: &Character, target: &Character, rng: &mut impl Rng) -> String {
    let kind = relation_kind(actor, target);
    let role_key = role_pair_key(actor.role, target.role);
    let template = resolve_pool(kind, role_key)
        .and_then(|pool| pool.choose(rng).copied())
        .unwrap_or(NEUTRAL_INTERACTION);
    render(
        template,
        &[("actor", &actor.name), ("target", &target.name)],
    )
}
