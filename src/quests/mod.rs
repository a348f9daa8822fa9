//! Quest board: state machine, candidate matching, daily tick.

pub mod logic;
pub mod types;

pub use logic::{Payout, QuestTick};
pub use types::{Quest, QuestKind, QuestStatus};
