use thiserror::Error;

use crate::sim_engine::models::Card;

/// Errors raised by the simulation engine.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot deal {requested} cards, only {remaining} remain in the deck")]
    DeckUnderflow { requested: usize, remaining: usize },

    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),

    #[error("rank {0} is outside 2..=14")]
    InvalidRank(u8),

    #[error("invalid card notation: {0:?}")]
    InvalidCard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
