use std::collections::HashSet;

use rand::Rng;
use crate::sim_engine::{
    error::SimError,
    models::{Card, Rank, Suit},
};

/// A standard 52-card deck that can be shuffled and dealt from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh deck in canonical rank-major order (2s 2h 2d 2c 3s ...).
    pub fn new() -> Self {
        let cards = Rank::all()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card { rank, suit }))
            .collect();
        Deck { cards, cursor: 0 }
    }

    /// Build a fresh deck and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        deck
    }

    /// A stacked deck dealt in exactly the given order.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, SimError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for &c in &cards {
            if !seen.insert(c) {
                return Err(SimError::DuplicateCard(c));
            }
        }
        Ok(Deck { cards, cursor: 0 })
    }

    /// Fisher-Yates shuffle of the cards not yet dealt.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let undealt = &mut self.cards[self.cursor..];
        for i in (1..undealt.len()).rev() {
            let j = rng.gen_range(0..=i);
            undealt.swap(i, j);
        }
    }

    /// Deal one card.
    pub fn deal(&mut self) -> Result<Card, SimError> {
        let [card] = self.deal_array::<1>()?;
        Ok(card)
    }

    /// Deal `n` cards at once. Nothing is consumed when too few remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, SimError> {
        if n > self.remaining() {
            return Err(SimError::DeckUnderflow { requested: n, remaining: self.remaining() });
        }
        let dealt = self.cards[self.cursor..self.cursor + n].to_vec();
        self.cursor += n;
        Ok(dealt)
    }

    /// Deal a fixed number of cards straight into an array.
    pub fn deal_array<const N: usize>(&mut self) -> Result<[Card; N], SimError> {
        let underflow = SimError::DeckUnderflow { requested: N, remaining: self.remaining() };
        if N > self.remaining() {
            return Err(underflow);
        }
        let out: [Card; N] = self.cards[self.cursor..self.cursor + N]
            .try_into()
            .map_err(|_| underflow)?;
        self.cursor += N;
        Ok(out)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// All dealt cards so far (useful for integrity checks).
    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Every card in current deck order, dealt or not.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn card_set(cards: &[Card]) -> HashSet<Card> {
        cards.iter().copied().collect()
    }

    #[test]
    fn fresh_deck_has_52_unique_cards() {
        let deck = Deck::new();
        assert_eq!(deck.remaining(), 52);
        assert_eq!(card_set(deck.cards()).len(), 52);
        let head: Vec<String> = deck.cards()[..5].iter().map(|c| c.to_string()).collect();
        assert_eq!(head, ["2s", "2h", "2d", "2c", "3s"]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let canonical = card_set(Deck::new().cards());
        for seed in [1u64, 42, 999, 0xDEAD_BEEF] {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = Deck::new_shuffled(&mut rng);
            assert_eq!(deck.cards().len(), 52);
            assert_eq!(card_set(deck.cards()), canonical, "seed {seed}");
        }
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<Card> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_shuffled(&mut rng);
            deck.deal_n(5).unwrap()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn dealing_consumes_a_prefix() {
        let mut deck = Deck::new();
        let first = deck.deal_n(3).unwrap();
        assert_eq!(first, deck.cards()[..3].to_vec());
        let [a, b] = deck.deal_array::<2>().unwrap();
        assert_eq!([a, b], [deck.cards()[3], deck.cards()[4]]);
        assert_eq!(deck.remaining(), 47);
        assert_eq!(deck.dealt_cards().len(), 5);
    }

    #[test]
    fn overdealing_reports_underflow_and_keeps_cards() {
        let mut deck = Deck::new();
        deck.deal_n(50).unwrap();
        match deck.deal_n(3) {
            Err(SimError::DeckUnderflow { requested, remaining }) => {
                assert_eq!((requested, remaining), (3, 2));
            }
            other => panic!("expected underflow, got {other:?}"),
        }
        assert_eq!(deck.remaining(), 2);
        assert!(deck.deal_array::<5>().is_err());
        deck.deal().unwrap();
        deck.deal().unwrap();
        assert!(deck.deal().is_err());
    }

    #[test]
    fn stacked_deck_rejects_duplicates() {
        let ace: Card = "As".parse().unwrap();
        let king: Card = "Kd".parse().unwrap();
        assert!(Deck::from_cards(vec![ace, king]).is_ok());
        assert!(matches!(
            Deck::from_cards(vec![ace, king, ace]),
            Err(SimError::DuplicateCard(c)) if c == ace
        ));
    }
}
