//! Quest board data model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::Character;
use crate::core::constants::ESCORT_DEFAULT_DURATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    Subjugation,
    Assassination,
    Escort,
}

impl QuestKind {
    pub fn label(self) -> &'static str {
        match self {
            QuestKind::Subjugation => "subjugation",
            QuestKind::Assassination => "assassination",
            QuestKind::Escort => "escort",
        }
    }
}

/// Completed and Failed are terminal; the daily tick never touches a
/// quest in a terminal state again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    Open,
    InProgress,
    Completed,
    Failed,
}

impl QuestStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, QuestStatus::Completed | QuestStatus::Failed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: Uuid,
    pub kind: QuestKind,
    pub target_id: Uuid,
    pub target_name: String,
    pub reward: u32,
    /// Remaining days for escorts; subjugation/assassination run open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub status: QuestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
}

impl Quest {
    /// Posts an open quest against a target. Escorts without an explicit
    /// duration get the standard escort length.
    pub fn post(kind: QuestKind, target: &Character, reward: u32, duration: Option<u32>) -> Self {
        let duration = match kind {
            QuestKind::Escort => duration.or(Some(ESCORT_DEFAULT_DURATION)),
            _ => duration,
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            target_id: target.id,
            target_name: target.name.clone(),
            reward,
            duration,
            status: QuestStatus::Open,
            assignee_id: None,
            assignee_name: None,
        }
    }
}
