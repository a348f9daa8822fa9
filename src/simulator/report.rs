//! Simulation report generation.

use serde::Serialize;

/// Stats collected from a single run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub days: u32,
    pub battles: u32,
    pub hero_wins: u32,
    pub villain_wins: u32,
    pub deaths: u32,
    pub quests_completed: u32,
    pub quests_failed: u32,
    pub log_entries: u32,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub total_battles: u32,
    pub hero_win_rate: f64,
    pub avg_battles_per_run: f64,
    pub avg_deaths_per_run: f64,
    pub avg_quests_completed: f64,
    pub avg_quests_failed: f64,
    pub avg_log_entries: f64,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = (num_runs as f64).max(1.0);

        let total_battles: u32 = runs.iter().map(|r| r.battles).sum();
        let hero_wins: u32 = runs.iter().map(|r| r.hero_wins).sum();
        let hero_win_rate = if total_battles > 0 {
            hero_wins as f64 / total_battles as f64
        } else {
            0.0
        };

        Self {
            num_runs,
            total_battles,
            hero_win_rate,
            avg_battles_per_run: total_battles as f64 / divisor,
            avg_deaths_per_run: runs.iter().map(|r| r.deaths as f64).sum::<f64>() / divisor,
            avg_quests_completed: runs.iter().map(|r| r.quests_completed as f64).sum::<f64>()
                / divisor,
            avg_quests_failed: runs.iter().map(|r| r.quests_failed as f64).sum::<f64>() / divisor,
            avg_log_entries: runs.iter().map(|r| r.log_entries as f64).sum::<f64>() / divisor,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== SIMULATION REPORT ===\n");
        out.push_str(&format!("Runs:                {}\n", self.num_runs));
        out.push_str(&format!("Total battles:       {}\n", self.total_battles));
        out.push_str(&format!(
            "Hero win rate:       {:.1}%\n",
            self.hero_win_rate * 100.0
        ));
        out.push_str(&format!(
            "Avg battles/run:     {:.2}\n",
            self.avg_battles_per_run
        ));
        out.push_str(&format!(
            "Avg deaths/run:      {:.2}\n",
            self.avg_deaths_per_run
        ));
        out.push_str(&format!(
            "Avg quests done:     {:.2}\n",
            self.avg_quests_completed
        ));
        out.push_str(&format!(
            "Avg quests failed:   {:.2}\n",
            self.avg_quests_failed
        ));
        out.push_str(&format!(
            "Avg journal entries: {:.2}\n",
            self.avg_log_entries
        ));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
