//! Battle resolver: damage model, turn loop, skip resolution.

pub mod logic;
pub mod types;

pub use types::{AttackOutcome, BattleReport, BattleSide, BattleState, CombatProfile};
