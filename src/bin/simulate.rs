//! Balance simulator CLI.
//!
//! Run Monte Carlo simulations over the day loop to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 runs x 60 days
//!   cargo run --bin simulate -- -n 500 -d 90     # 500 runs of 90 days
//!   cargo run --bin simulate -- --seed 42        # Reproducible batch

use chronicle::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CHRONICLE BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:         {}", config.num_runs);
    println!("  Days per run: {}", config.days_per_run);
    println!("  Quests:       {}", config.with_quests);
    if let Some(seed) = config.seed {
        println!("  Seed:         {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write JSON report: {}", err),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-d" | "--days" => {
                if i + 1 < args.len() {
                    config.days_per_run = args[i + 1].parse().unwrap_or(config.days_per_run);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig {
                    seed: config.seed,
                    verbosity: config.verbosity,
                    ..SimConfig::quick()
                };
            }
            "--no-quests" => {
                config.with_quests = false;
            }
            "--json" => {}
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Options: -n/--runs N, -d/--days N, -s/--seed N, -v, --quick, --no-quests, --json");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}
