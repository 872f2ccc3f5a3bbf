use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::sim_engine::error::SimError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Canonical dealing order used when a fresh deck is built.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades   => 's',
            Suit::Hearts   => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs    => 'c',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _   => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(pub u8);

impl TryFrom<u8> for Rank {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (2..=14).contains(&value) {
            Ok(Rank(value))
        } else {
            Err(SimError::InvalidRank(value))
        }
    }
}

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const SEVEN: Rank = Rank(7);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const ACE: Rank = Rank(14);

    /// Position in "23456789TJQKA": 2 maps to 0, Ace to 12.
    pub fn ordinal(self) -> u8 {
        self.0 - 2
    }

    pub fn symbol(self) -> char {
        match self.0 {
            2 => '2', 3 => '3', 4 => '4', 5 => '5', 6 => '6',
            7 => '7', 8 => '8', 9 => '9', 10 => 'T',
            11 => 'J', 12 => 'Q', 13 => 'K', 14 => 'A',
            _ => '?',
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let value = match c {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (2u8..=14).map(Rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = SimError;

    /// Parse two-character notation such as `"As"` or `"Td"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SimError::InvalidCard(s.to_string()));
        };
        match (Rank::from_symbol(r), Suit::from_symbol(su)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(SimError::InvalidCard(s.to_string())),
        }
    }
}

/// Two private hole cards.
pub type Hand = [Card; 2];

/// Five shared community cards.
pub type Board = [Card; 5];

// ---------------------------------------------------------------------------
// Starting-hand categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    PocketPair,
    SuitedConnector,
    SuitedNonConnector,
    OffsuitConnector,
    OffsuitNonConnector,
}

impl HandCategory {
    pub const ALL: [HandCategory; 5] = [
        HandCategory::PocketPair,
        HandCategory::SuitedConnector,
        HandCategory::SuitedNonConnector,
        HandCategory::OffsuitConnector,
        HandCategory::OffsuitNonConnector,
    ];
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::PocketPair          => "Pocket Pair",
            HandCategory::SuitedConnector     => "Suited Connector",
            HandCategory::SuitedNonConnector  => "Suited Non-Connector",
            HandCategory::OffsuitConnector    => "Offsuit Connector",
            HandCategory::OffsuitNonConnector => "Offsuit Non-Connector",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Round results
// ---------------------------------------------------------------------------

/// One player's view of a finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Zero-based player index; transcripts print it one-based.
    pub index: usize,
    pub hand: Hand,
    pub category: HandCategory,
    pub folds: bool,
    /// Strength score, only present for players that stayed in.
    pub score: Option<u8>,
}

impl Seat {
    pub fn is_active(&self) -> bool {
        !self.folds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Fewer than two players stayed in; nobody is awarded the round.
    NotEnoughPlayers,
    /// Indices of every active player holding the top score.
    Winners(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub seats: Vec<Seat>,
    pub board: Board,
    pub outcome: Outcome,
}

impl RoundResult {
    pub fn active_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_active())
    }

    pub fn winning_seats(&self) -> impl Iterator<Item = &Seat> {
        let winners: &[usize] = match &self.outcome {
            Outcome::Winners(w) => w,
            Outcome::NotEnoughPlayers => &[],
        };
        self.seats.iter().filter(move |s| winners.contains(&s.index))
    }

    /// Highest score among active seats, if any seat stayed in.
    pub fn max_score(&self) -> Option<u8> {
        self.active_seats().filter_map(|s| s.score).max()
    }
}
