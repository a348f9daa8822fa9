//! Static flavor-text tables.
//!
//! Interaction pools are keyed by (relationship kind, role-pair key); the
//! resolver in `relationship.rs` walks the fallback chain. Placeholders
//! use `{actor}`/`{target}` for interactions, `{attacker}`/`{defender}`
//! for battle lines, `{name}` for single-subject lines.

use crate::character::Role;

/// Synthetic relationship kind used when no edge connects two characters.
pub const STRANGER_KIND: &str = "stranger";

/// Role-pair key matching any pairing for a given kind.
pub const COMMON_ROLE_KEY: &str = "COMMON";

/// Last-resort line when every pool lookup fails.
pub const NEUTRAL_INTERACTION: &str = "{actor} stares blankly at {target}.";

// ===== Interaction pools: (kind, role-pair key, lines) =====
// The (stranger, COMMON) pool must stay non-empty; it is the terminal
// fallback before NEUTRAL_INTERACTION.
pub static INTERACTION_POOLS: &[(&str, &str, &[&str])] = &[
    (
        "friend",
        "HERO_HERO",
        &[
            "{actor} and {target} trade war stories over cheap coffee.",
            "{actor} spars with {target} until both collapse laughing.",
            "{actor} covers {target}'s patrol shift without being asked.",
        ],
    ),
    (
        "friend",
        "HERO_CIVILIAN",
        &[
            "{actor} walks {target} home through the safe streets.",
            "{actor} shares leftover takeout with {target} on a rooftop.",
        ],
    ),
    (
        "friend",
        "COMMON",
        &[
            "{actor} catches up with {target} over lunch.",
            "{actor} and {target} argue about nothing in particular, fondly.",
            "{actor} lends {target} an umbrella in the rain.",
        ],
    ),
    (
        "rival",
        "HERO_HERO",
        &[
            "{actor} beats {target}'s rooftop sprint record by a hair.",
            "{actor} and {target} count their saves out loud at each other.",
        ],
    ),
    (
        "rival",
        "VILLAIN_VILLAIN",
        &[
            "{actor} sabotages {target}'s heist plans out of pure spite.",
            "{actor} steals {target}'s favorite hideout booth.",
        ],
    ),
    (
        "rival",
        "COMMON",
        &[
            "{actor} glares at {target} across the street.",
            "{actor} refuses to lose an argument with {target}.",
        ],
    ),
    (
        "family",
        "COMMON",
        &[
            "{actor} nags {target} about eating properly.",
            "{actor} calls {target} just to hear their voice.",
            "{actor} and {target} bicker like only family can.",
        ],
    ),
    (
        "lover",
        "COMMON",
        &[
            "{actor} leaves a note in {target}'s coat pocket.",
            "{actor} and {target} watch the city lights in silence.",
        ],
    ),
    (
        "enemy",
        "HERO_VILLAIN",
        &[
            "{actor} and {target} lock eyes across a crowded plaza. Not today.",
            "{actor} tails {target} for three blocks before losing them.",
        ],
    ),
    (
        "enemy",
        "COMMON",
        &[
            "{actor} pointedly ignores {target} at the market.",
            "{actor} mutters a curse at the mention of {target}.",
        ],
    ),
    (
        "colleague",
        "COMMON",
        &[
            "{actor} and {target} split the paperwork nobody wanted.",
            "{actor} covers for {target} at work, again.",
        ],
    ),
    (
        STRANGER_KIND,
        "HERO_CIVILIAN",
        &[
            "{actor} helps {target} carry groceries up the stairs.",
            "{target} asks {actor} for an autograph, shyly.",
        ],
    ),
    (
        STRANGER_KIND,
        "VILLAIN_CIVILIAN",
        &[
            "{target} crosses the street to avoid {actor}.",
            "{actor} cuts in front of {target} at the bus stop.",
        ],
    ),
    (
        STRANGER_KIND,
        "COMMON",
        &[
            "{actor} bumps into {target} on the sidewalk.",
            "{actor} and {target} wait for the same light in silence.",
            "{actor} nods at {target}. {target} nods back.",
        ],
    ),
];

/// Lines for a matching pool, if one exists.
pub fn interaction_pool(kind: &str, role_key: &str) -> Option<&'static [&'static str]> {
    INTERACTION_POOLS
        .iter()
        .find(|(k, r, _)| *k == kind && *r == role_key)
        .map(|(_, _, lines)| *lines)
}

// ===== Battle outcome lines =====
pub static CRIT_LINES: &[&str] = &[
    "{attacker} finds the perfect opening and strikes {defender} dead-on!",
    "A devastating blow! {attacker} sends {defender} reeling!",
    "{attacker}'s attack lands exactly where {defender} can't guard!",
];

pub static GLANCING_LINES: &[&str] = &[
    "{defender} twists away and {attacker}'s strike barely connects.",
    "{attacker} swings wide; {defender} takes only a graze.",
];

pub static HEAVY_LINES: &[&str] = &[
    "{attacker} slams {defender} into the pavement!",
    "{defender} staggers under the force of {attacker}'s assault!",
];

pub static NORMAL_LINES: &[&str] = &[
    "{attacker} presses the attack on {defender}.",
    "{attacker} lands a solid hit on {defender}.",
    "{attacker} and {defender} trade blows; {attacker} gets the better of it.",
];

// ===== Daily simulation lines =====
pub static RECOVERY_LINES: &[&str] = &[
    "{name} is back on their feet, wounds mostly mended.",
    "{name} shakes off the last of their injuries.",
];

pub static HARASSMENT_LINES: &[&str] = &[
    "{villain} shakes down {civilian} in a back alley.",
    "{villain} torments {civilian} just to watch them squirm.",
    "{villain} corners {civilian} and leaves them trembling.",
];

pub static HARASSMENT_KILL_LINES: &[&str] = &[
    "It went too far. {villain} has killed {civilian}.",
    "{villain}'s cruelty turns lethal; {civilian} does not get up.",
];

static HERO_AMBIENT_LINES: &[&str] = &[
    "{name} rescues a cat from a power line, to scattered applause.",
    "{name} patrols the riverfront until dawn.",
    "{name} signs autographs outside the precinct.",
];

static VILLAIN_AMBIENT_LINES: &[&str] = &[
    "{name} is seen casing the jewelry district.",
    "{name} monologues to an empty warehouse, rehearsing.",
    "{name} tips poorly and feels nothing.",
];

static CIVILIAN_AMBIENT_LINES: &[&str] = &[
    "{name} tries a new lunch spot and regrets it.",
    "{name} wins a small bet and tells everyone.",
    "{name} complains about the weather at length.",
];

pub fn ambient_pool(role: Role) -> &'static [&'static str] {
    match role {
        Role::Hero => HERO_AMBIENT_LINES,
        Role::Villain => VILLAIN_AMBIENT_LINES,
        Role::Civilian => CIVILIAN_AMBIENT_LINES,
    }
}

// ===== Quest progress lines =====
pub static SUBJUGATION_PROGRESS_LINES: &[&str] = &[
    "{assignee} tracks {target} through the lower districts.",
    "{assignee} shadows {target}'s known haunts, waiting.",
];

pub static ASSASSINATION_PROGRESS_LINES: &[&str] = &[
    "{assignee} studies {target}'s routine from a distance.",
    "{assignee} sharpens their tools and watches {target}'s window.",
];

pub static ESCORT_PROGRESS_LINES: &[&str] = &[
    "{assignee} keeps {target} moving along the safe route.",
    "{assignee} scans the crowd while {target} rests.",
];
