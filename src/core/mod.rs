//! Simulation core: state, orchestrator, daily tick, constants, journal.

pub mod constants;
pub mod game;
pub mod game_state;
pub mod log;
pub mod tick;
