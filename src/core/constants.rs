//! Tuning constants for the simulation.

// ===== Battle =====
pub const BATTLE_START_HP: i32 = 100;
pub const BATTLE_CHANCE: f64 = 0.5;
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_LUCK_DIVISOR: f64 = 400.0;
pub const ATTACK_STRENGTH_FACTOR: f64 = 1.5;
pub const ATTACK_POWER_FACTOR: f64 = 0.3;
pub const DEFENSE_STAMINA_FACTOR: f64 = 0.8;
pub const DEFENSE_INTELLIGENCE_FACTOR: f64 = 0.2;
pub const PENETRATION_PER_INT_POINT: f64 = 0.01;
pub const PENETRATION_CAP: f64 = 0.3;
pub const DEFENSE_MITIGATION: f64 = 0.5;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.9;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.1;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const GLANCING_CHANCE: f64 = 0.2;
pub const GLANCING_MULTIPLIER: f64 = 0.5;
pub const DAMAGE_SCALE_DIVISOR: f64 = 4.0;
pub const MIN_FINAL_DAMAGE: u32 = 2;
pub const HEAVY_DAMAGE_THRESHOLD: u32 = 25;

// ===== Battle aftermath =====
pub const WINNER_POWER_GAIN: u32 = 2;
pub const POWER_CAP: u32 = 100;
pub const STAT_CAP: u32 = 100;
pub const LOSER_DEATH_CHANCE: f64 = 0.2;
pub const BATTLE_LOG_TAIL: usize = 6;

// ===== Daily simulation =====
pub const RECOVERY_CHANCE: f64 = 0.3;
pub const HARASSMENT_CHANCE: f64 = 0.3;
pub const HARASSMENT_LETHAL_CHANCE: f64 = 0.1;
pub const AMBIENT_EVENT_CHANCE: f64 = 0.2;

// ===== Quests =====
pub const QUEST_BASE_ACCEPTANCE: f64 = 0.30;
pub const QUEST_FRIEND_AFFINITY_CUTOFF: i32 = 20;
pub const QUEST_GREEDY_REWARD_FLOOR: u32 = 3000;
pub const QUEST_GREEDY_BONUS: f64 = 0.4;
pub const QUEST_GREEDY_PENALTY: f64 = -0.1;
pub const QUEST_RIGHTEOUS_BONUS: f64 = 0.3;
pub const QUEST_LAZY_PENALTY: f64 = -0.2;
pub const QUEST_CRUEL_BONUS: f64 = 0.3;
pub const QUEST_HIGH_REWARD_FLOOR: u32 = 5000;
pub const QUEST_HIGH_REWARD_BONUS: f64 = 0.2;
pub const QUEST_LOW_REWARD_CEILING: u32 = 1000;
pub const QUEST_LOW_REWARD_PENALTY: f64 = -0.1;
pub const QUEST_PROGRESS_FLAVOR_CHANCE: f64 = 0.4;
pub const ESCORT_DEFAULT_DURATION: u32 = 3;

// ===== Character creation =====
pub const CIVILIAN_BASE_POWER: u32 = 10;
pub const DEFAULT_POWER: u32 = 50;

// ===== Persistence =====
pub const SNAPSHOT_VERSION: u32 = 1;
