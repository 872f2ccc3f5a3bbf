use crate::sim_engine::models::{Board, Card, Hand, HandCategory};

/// True if the two ranks sit next to each other (A-2 does not wrap).
fn is_connector(a: Card, b: Card) -> bool {
    a.rank.ordinal().abs_diff(b.rank.ordinal()) == 1
}

/// Bucket a starting hand into one of the five reporting categories.
pub fn classify_hand(hand: Hand) -> HandCategory {
    let [a, b] = hand;
    let connected = is_connector(a, b);
    if a.rank == b.rank {
        HandCategory::PocketPair
    } else if a.suit == b.suit {
        if connected { HandCategory::SuitedConnector } else { HandCategory::SuitedNonConnector }
    } else if connected {
        HandCategory::OffsuitConnector
    } else {
        HandCategory::OffsuitNonConnector
    }
}

/// Highest rank ordinal among the hole cards and the board.
///
/// Deliberately not a poker ranking: pairs, straights and flushes are
/// ignored, so the score is always in `0..=12`.
pub fn hand_strength(hand: &Hand, board: &Board) -> u8 {
    hand.iter()
        .chain(board.iter())
        .map(|c| c.rank.ordinal())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards<const N: usize>(s: &str) -> [Card; N] {
        let parsed: Vec<Card> = s.split_whitespace().map(|c| c.parse().unwrap()).collect();
        parsed.try_into().unwrap()
    }

    #[test]
    fn classifies_each_category() {
        assert_eq!(classify_hand(cards("Ks Kh")), HandCategory::PocketPair);
        assert_eq!(classify_hand(cards("7s 8s")), HandCategory::SuitedConnector);
        assert_eq!(classify_hand(cards("7s 9s")), HandCategory::SuitedNonConnector);
        assert_eq!(classify_hand(cards("7s 8h")), HandCategory::OffsuitConnector);
        assert_eq!(classify_hand(cards("2c 9d")), HandCategory::OffsuitNonConnector);
    }

    #[test]
    fn connector_ignores_card_order_and_ace_wrap() {
        assert_eq!(classify_hand(cards("Qd Kd")), classify_hand(cards("Kd Qd")));
        assert_eq!(classify_hand(cards("As 2s")), HandCategory::SuitedNonConnector);
        assert_eq!(classify_hand(cards("Ah Kc")), HandCategory::OffsuitConnector);
    }

    #[test]
    fn strength_is_highest_single_rank() {
        let hand = cards("As 2h");
        let board = cards("3c 4d 5s 6h 7c");
        assert_eq!(hand_strength(&hand, &board), 12);

        let hand = cards("2s 3h");
        let board = cards("4c 4d 9s 9h 9c");
        assert_eq!(hand_strength(&hand, &board), 7);
    }

    #[test]
    fn board_high_card_is_shared() {
        let board = cards("Kc 4d 9s 2h 3c");
        assert_eq!(hand_strength(&cards("Qs Jh"), &board), 11);
        assert_eq!(hand_strength(&cards("5s 6h"), &board), 11);
    }
}
