//! Balance simulator for Monte Carlo analysis.
//!
//! Runs many simulated timelines to analyze:
//! - Battle frequency and hero/villain win split
//! - Death rates over a multi-day horizon
//! - Quest completion/failure balance
//!
//! The simulator drives the real `Game` orchestrator, so its results
//! match actual gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{default_cast, run_simulation};
