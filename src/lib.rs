//! Chronicle - Turn-Based Narrative Life Simulation Library
//!
//! This module exposes the simulation core for testing and external hosts:
//! the day orchestrator, battle resolver, quest engine, daily event pass,
//! and the relationship-driven narrative text selection.

pub mod character;
pub mod combat;
pub mod core;
pub mod items;
pub mod narrative;
pub mod quests;
pub mod simulator;
pub mod utils;

pub use crate::character::{Character, CharacterDraft, Personality, Role, Stats, Status};
pub use crate::core::game::{DayAdvance, Game};
pub use crate::core::game_state::GameState;
pub use crate::core::log::{Journal, LogEntry, LogKind};
pub use crate::quests::{Quest, QuestKind, QuestStatus};
