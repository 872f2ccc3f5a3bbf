//! Deal and print one illustrative round.
//!
//! Run with: `cargo run --bin single_round`
//!
//! Prints every player's hole cards with their fold decision, the board, and
//! the winner(s). Pass `--seed` to replay a specific deal.

use clap::Parser;
use poker_round_sim::{play_round, sim_engine::report::render_round, SimConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Simulate a single five-player poker round")]
struct Args {
    /// RNG seed for a reproducible deal
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the round as JSON instead of a transcript
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = SimConfig { seed: args.seed, ..SimConfig::default() };
    let mut rng = config.rng();
    let result = play_round(&mut rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_round(&result));
    }
    Ok(())
}
