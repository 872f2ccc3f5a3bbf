//! Win rates by starting-hand category over many simulated rounds.
//!
//! Run with: `cargo run --bin win_rates`
//!
//! Defaults to 10,000 rounds with an interim report every 1,000, then waits
//! for Enter before exiting.

use std::io::{self, BufRead, Write};

use clap::Parser;
use poker_round_sim::{
    run_simulation,
    sim_engine::config::{DEFAULT_REPORT_EVERY, DEFAULT_ROUNDS},
    sim_engine::report::{render_final, render_snapshot},
    SimConfig,
};

#[derive(Parser, Debug)]
#[command(version, about = "Aggregate win rates by starting-hand category")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u64,

    /// Print an interim report every N rounds
    #[arg(long, default_value_t = DEFAULT_REPORT_EVERY)]
    report_every: u64,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the final summary as JSON instead of text reports
    #[arg(long)]
    json: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SimConfig {
        rounds: args.rounds,
        report_every: args.report_every,
        seed: args.seed,
    };
    let mut rng = config.rng();

    let json = args.json;
    let summary = run_simulation(&config, &mut rng, |snapshot| {
        if !json {
            print!("{}", render_snapshot(snapshot));
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_final(&summary.final_rates));
    }

    if !args.no_wait {
        print!("\nPress Enter to exit...");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    Ok(())
}
