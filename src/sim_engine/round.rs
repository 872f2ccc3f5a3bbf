//! One dealt round: deal, fold filter, scoring and winner resolution.

use rand::Rng;
use crate::sim_engine::{
    deck::Deck,
    error::SimError,
    evaluator::{classify_hand, hand_strength},
    fold::should_fold,
    models::{Board, Hand, Outcome, RoundResult, Seat},
};

/// Players at the table.
pub const PLAYERS: usize = 5;
/// Community cards dealt after the hole cards.
pub const BOARD_CARDS: usize = 5;
/// Hole cards dealt to the whole table.
pub const HOLE_CARDS: usize = 2 * PLAYERS;
/// A round needs at least this many active players to be resolved.
pub const MIN_ACTIVE: usize = 2;

/// Cards handed out for one round, before any decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Hand; PLAYERS],
    pub board: Board,
}

/// Deal two consecutive cards to each player in seat order, then the board.
pub fn deal_table(deck: &mut Deck) -> Result<Deal, SimError> {
    let hole = deck.deal_array::<HOLE_CARDS>()?;
    let board = deck.deal_array::<BOARD_CARDS>()?;
    let hands = std::array::from_fn(|i| [hole[2 * i], hole[2 * i + 1]]);
    Ok(Deal { hands, board })
}

/// Apply the fold heuristic, score active players and pick the winner(s).
pub fn resolve(deal: &Deal) -> RoundResult {
    let mut seats: Vec<Seat> = deal
        .hands
        .iter()
        .enumerate()
        .map(|(index, &hand)| Seat {
            index,
            hand,
            category: classify_hand(hand),
            folds: should_fold(hand),
            score: None,
        })
        .collect();

    let active = seats.iter().filter(|s| s.is_active()).count();
    if active < MIN_ACTIVE {
        log::debug!("round ends with {active} active player(s)");
        return RoundResult { seats, board: deal.board, outcome: Outcome::NotEnoughPlayers };
    }

    for seat in seats.iter_mut().filter(|s| s.is_active()) {
        seat.score = Some(hand_strength(&seat.hand, &deal.board));
    }
    let best = seats.iter().filter_map(|s| s.score).max();
    let winners: Vec<usize> = seats
        .iter()
        .filter(|s| s.score.is_some() && s.score == best)
        .map(|s| s.index)
        .collect();
    log::debug!("{active} active, best score {best:?}, winners {winners:?}");

    RoundResult { seats, board: deal.board, outcome: Outcome::Winners(winners) }
}

/// Play a round from whatever order `deck` is currently in.
pub fn play_round_from(deck: &mut Deck) -> Result<RoundResult, SimError> {
    let deal = deal_table(deck)?;
    Ok(resolve(&deal))
}

/// Shuffle a fresh deck and play one round.
pub fn play_round<R: Rng>(rng: &mut R) -> Result<RoundResult, SimError> {
    let mut deck = Deck::new_shuffled(rng);
    play_round_from(&mut deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim_engine::models::Card;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stacked(s: &str) -> Deck {
        let cards: Vec<Card> = s.split_whitespace().map(|c| c.parse().unwrap()).collect();
        Deck::from_cards(cards).unwrap()
    }

    #[test]
    fn players_receive_consecutive_pairs() {
        let mut deck = Deck::new();
        let deal = deal_table(&mut deck).unwrap();
        let ordered = Deck::new();
        for (i, hand) in deal.hands.iter().enumerate() {
            assert_eq!(hand[..], ordered.cards()[2 * i..2 * i + 2]);
        }
        assert_eq!(deal.board[..], ordered.cards()[10..15]);
        assert_eq!(deck.remaining(), 52 - 15);
    }

    #[test]
    fn short_deck_underflows() {
        let mut deck = stacked("As Kd 2c 3d 7h 2s Qh Jh 8c 9c 2d 4h 6s 9d");
        assert!(matches!(play_round_from(&mut deck), Err(SimError::DeckUnderflow { .. })));
    }

    #[test]
    fn single_winner_has_top_score() {
        let mut deck = stacked("As Kd 2c 3d 7h 2s Qh Jh 8c 9c 2d 4h 6s 9d Tc");
        let result = play_round_from(&mut deck).unwrap();
        let folds: Vec<bool> = result.seats.iter().map(|s| s.folds).collect();
        assert_eq!(folds, [false, true, true, false, false]);
        assert_eq!(result.outcome, Outcome::Winners(vec![0]));
        assert_eq!(result.max_score(), Some(12));
        assert!(result.seats[1].score.is_none());
    }

    #[test]
    fn ties_are_not_broken() {
        let mut deck = stacked("Ks 2h Kd 2c 3s 4d 3h 5c 5d 6c Ac 7d 8s 9h Jd");
        let result = play_round_from(&mut deck).unwrap();
        assert_eq!(result.max_score(), Some(12));
        assert_eq!(result.outcome, Outcome::Winners(vec![0, 1]));
    }

    #[test]
    fn one_active_player_is_not_enough() {
        let mut deck = stacked("As Kd 2c 3d 7h 2s 8s 2d 9h 3s Qc Jc Tc 4c 5c");
        let result = play_round_from(&mut deck).unwrap();
        assert_eq!(result.active_seats().count(), 1);
        assert_eq!(result.outcome, Outcome::NotEnoughPlayers);
        assert!(result.seats.iter().all(|s| s.score.is_none()));
    }

    #[test]
    fn seeded_rounds_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..2_000 {
            let result = play_round(&mut rng).unwrap();
            let active = result.active_seats().count();
            match &result.outcome {
                Outcome::NotEnoughPlayers => assert!(active < MIN_ACTIVE),
                Outcome::Winners(winners) => {
                    assert!(active >= MIN_ACTIVE);
                    assert!(!winners.is_empty());
                    let best = result.max_score();
                    for seat in result.winning_seats() {
                        assert!(seat.is_active());
                        assert_eq!(seat.score, best);
                    }
                    for seat in result.active_seats() {
                        assert!(seat.score <= best);
                    }
                }
            }
        }
    }
}
