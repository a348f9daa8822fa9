//! Simulation configuration.

/// Configuration for a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent runs to perform
    pub num_runs: u32,

    /// Days to simulate per run
    pub days_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Whether each run posts a starter quest board
    pub with_quests: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            days_per_run: 60,
            seed: None,
            with_quests: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for fast sanity checks.
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            days_per_run: 30,
            ..Default::default()
        }
    }
}
