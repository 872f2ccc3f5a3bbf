//! # poker_round_sim
//!
//! A small five-player poker deal simulator.
//!
//! Each round shuffles a 52-card deck, deals five two-card hands and a
//! five-card board, folds hands according to a fixed rule table, and awards
//! the round to every remaining player holding the highest single card among
//! their hand and the board. No real hand ranking takes place: pairs,
//! straights and flushes are ignored.
//!
//! ## How it works
//!
//! 1. [`play_round`] deals one round and returns a [`RoundResult`] with each
//!    seat's hand, fold flag, category and score, plus the [`Outcome`].
//! 2. [`run_simulation`] repeats that for [`SimConfig::rounds`] rounds and
//!    tallies, per starting-hand [`HandCategory`], how often the category was
//!    in play and how much win credit it collected.
//! 3. [`report`](sim_engine::report) renders both as text transcripts.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_round_sim::{play_round, run_simulation, SimConfig};
//! use poker_round_sim::sim_engine::report::{render_final, render_round};
//!
//! let config = SimConfig { rounds: 2_000, seed: Some(42), ..SimConfig::default() };
//! let mut rng = config.rng();
//!
//! let round = play_round(&mut rng).unwrap();
//! print!("{}", render_round(&round));
//!
//! let summary = run_simulation(&config, &mut rng, |_| {}).unwrap();
//! print!("{}", render_final(&summary.final_rates));
//! ```

pub mod sim_engine;

// Convenience re-exports so callers can use `poker_round_sim::play_round`
// directly without reaching into `sim_engine::`.
pub use sim_engine::{
    classify_hand, fold_decision, hand_strength, play_round, play_round_from, run_simulation,
    should_fold, win_credit_split, Board, Card, CategoryRate, CategoryStats, Deck, Hand,
    HandCategory, Outcome, Rank, RoundResult, RunSummary, Seat, SimConfig, SimError, Snapshot,
    Suit, Tally,
};
