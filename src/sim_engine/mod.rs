//! Core simulation engine — dealing, fold decisions, scoring and aggregation.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: cards, hands, categories, round results |
//! | `error`      | `SimError`, the single error type of the engine |
//! | `deck`       | 52-card deck with Fisher-Yates shuffle and checked dealing |
//! | `fold`       | Ordered rule table deciding whether a hand folds |
//! | `evaluator`  | Hand category classification and the high-card strength score |
//! | `round`      | One five-player round from deal to winner resolution |
//! | `aggregator` | Multi-round tally of plays and win credit per category |
//! | `config`     | Run settings and RNG construction |
//! | `report`     | Text transcripts for rounds and win-rate reports |

pub mod aggregator;
pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod fold;
pub mod models;
pub mod report;
pub mod round;

pub use aggregator::{run_simulation, win_credit_split, CategoryRate, CategoryStats, RunSummary, Snapshot, Tally};
pub use config::SimConfig;
pub use deck::Deck;
pub use error::SimError;
pub use evaluator::{classify_hand, hand_strength};
pub use fold::{fold_decision, should_fold, FoldDecision, Verdict};
pub use models::{Board, Card, Hand, HandCategory, Outcome, Rank, RoundResult, Seat, Suit};
pub use round::{play_round, play_round_from};
