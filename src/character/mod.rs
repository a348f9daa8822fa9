//! Character roster data model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants::{CIVILIAN_BASE_POWER, DEFAULT_POWER};

/// Faction category. Mutually exclusive and not expected to change at
/// runtime (a future fall/redemption mechanic may convert it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Hero,
    Villain,
    Civilian,
}

impl Role {
    pub fn all() -> [Role; 3] {
        [Role::Hero, Role::Villain, Role::Civilian]
    }
}

/// Combat/life condition, distinct from role. `Dead` is terminal: a dead
/// character is skipped by every future day pass, battle selection, and
/// quest match, but stays visible in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Injured,
    Retired,
    Dead,
}

/// Combat stats on a 0-100 scale. Characters without explicit stats
/// (typically civilians) use the all-50 default in battle math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u32,
    pub intelligence: u32,
    pub stamina: u32,
    pub luck: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: 50,
            intelligence: 50,
            stamina: 50,
            luck: 50,
        }
    }
}

/// Personality tags consumed by quest acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Greedy,
    Righteous,
    Lazy,
    Cruel,
    Timid,
}

/// A directional relationship edge. A reverse edge marked `is_mutual`
/// allows lookup fallback from the other side; `target_name` is a snapshot
/// so history stays readable after the target is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub target_id: Uuid,
    pub target_name: String,
    pub kind: String,
    #[serde(default)]
    pub is_mutual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<i32>,
}

/// One item placed in a character's housing. Layout coordinates belong to
/// the presentation layer; the core only records what is placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: Uuid,
    pub item_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Housing {
    pub theme_id: String,
    #[serde(default)]
    pub items: Vec<PlacedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub role: Role,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbti: Option<String>,
    pub power: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superpower: Option<String>,
    #[serde(default)]
    pub personality: Vec<Personality>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub battles_won: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing: Option<Housing>,
}

impl Character {
    /// Build a roster entry from creation-collaborator input. The core
    /// assigns the id, Normal status, and zeroed lifetime counters.
    pub fn from_draft(draft: CharacterDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            image_url: draft.image_url,
            role: draft.role,
            status: Status::Normal,
            gender: draft.gender,
            age: draft.age,
            mbti: draft.mbti,
            power: draft.power,
            stats: draft.stats,
            superpower: draft.superpower,
            personality: draft.personality,
            relationships: draft.relationships,
            kills: 0,
            saves: 0,
            battles_won: 0,
            housing: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status != Status::Dead
    }

    /// Stats with the default-50 substitution applied, so battle math never
    /// branches on presence.
    pub fn effective_stats(&self) -> Stats {
        self.stats.unwrap_or_default()
    }

    pub fn relationship_to(&self, target_id: Uuid) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.target_id == target_id)
    }
}

/// Fields supplied by the character-creation collaborator.
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    pub name: String,
    pub role: Role,
    pub image_url: Option<String>,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub mbti: Option<String>,
    pub power: u32,
    pub stats: Option<Stats>,
    pub superpower: Option<String>,
    pub personality: Vec<Personality>,
    pub relationships: Vec<Relationship>,
}

impl CharacterDraft {
    /// Draft with role-appropriate default power: civilians get a fixed low
    /// power and usually no stats.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        let power = match role {
            Role::Civilian => CIVILIAN_BASE_POWER,
            _ => DEFAULT_POWER,
        };
        Self {
            name: name.into(),
            role,
            image_url: None,
            gender: None,
            age: None,
            mbti: None,
            power,
            stats: None,
            superpower: None,
            personality: Vec::new(),
            relationships: Vec::new(),
        }
    }
}
