//! Static preflop fold heuristic.
//!
//! The heuristic is an ordered decision list. Each [`FoldRule`] looks at the
//! two hole-card ranks and either returns a [`Verdict`] or passes. The first
//! rule that returns a verdict decides the hand; a hand no rule claims is
//! played. Suits never matter.
//!
//! | Rule              | Applies when                         | Verdict |
//! |-------------------|--------------------------------------|---------|
//! | `low-cards`       | both ranks 6 or lower                | play pairs and aces, fold the rest |
//! | `sevens`          | either card is a 7                   | fold unless 77, A7 or 87 |
//! | `eights`          | either card is an 8                  | fold unless 88, A8, 87, 98 or T8 |
//! | `nine-with-small` | a 9 with a 7 or lower                | fold |

use crate::sim_engine::models::{Hand, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fold,
    Play,
}

/// One entry of the decision list.
pub struct FoldRule {
    pub name: &'static str,
    pub check: fn(Rank, Rank) -> Option<Verdict>,
}

/// The outcome of running a hand through [`FOLD_RULES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldDecision {
    pub verdict: Verdict,
    /// Name of the rule that decided, `None` when the hand fell through.
    pub rule: Option<&'static str>,
}

impl FoldDecision {
    pub fn folds(&self) -> bool {
        self.verdict == Verdict::Fold
    }
}

/// Highest ordinal counted as a "low" card (rank 6).
const LOW_CARD_MAX: u8 = 4;
/// Highest ordinal a 9 folds against (rank 7).
const NINE_KICKER_MAX: u8 = 5;

const SEVEN_KEEPERS: &[(Rank, Rank)] = &[
    (Rank::SEVEN, Rank::SEVEN),
    (Rank::SEVEN, Rank::ACE),
    (Rank::SEVEN, Rank::EIGHT),
];

const EIGHT_KEEPERS: &[(Rank, Rank)] = &[
    (Rank::EIGHT, Rank::EIGHT),
    (Rank::EIGHT, Rank::ACE),
    (Rank::EIGHT, Rank::SEVEN),
    (Rank::EIGHT, Rank::NINE),
    (Rank::EIGHT, Rank::TEN),
];

pub static FOLD_RULES: [FoldRule; 4] = [
    FoldRule { name: "low-cards", check: low_cards },
    FoldRule { name: "sevens", check: sevens },
    FoldRule { name: "eights", check: eights },
    FoldRule { name: "nine-with-small", check: nine_with_small },
];

/// Either ordering of `(a, b)` appears in `keepers`.
fn kept(keepers: &[(Rank, Rank)], a: Rank, b: Rank) -> bool {
    keepers.contains(&(a, b)) || keepers.contains(&(b, a))
}

fn low_cards(a: Rank, b: Rank) -> Option<Verdict> {
    if a.ordinal() > LOW_CARD_MAX || b.ordinal() > LOW_CARD_MAX {
        return None;
    }
    if a == b || a == Rank::ACE || b == Rank::ACE {
        Some(Verdict::Play)
    } else {
        Some(Verdict::Fold)
    }
}

fn sevens(a: Rank, b: Rank) -> Option<Verdict> {
    let has_seven = a == Rank::SEVEN || b == Rank::SEVEN;
    (has_seven && !kept(SEVEN_KEEPERS, a, b)).then_some(Verdict::Fold)
}

fn eights(a: Rank, b: Rank) -> Option<Verdict> {
    let has_eight = a == Rank::EIGHT || b == Rank::EIGHT;
    (has_eight && !kept(EIGHT_KEEPERS, a, b)).then_some(Verdict::Fold)
}

fn nine_with_small(a: Rank, b: Rank) -> Option<Verdict> {
    let folds = (a == Rank::NINE && b.ordinal() <= NINE_KICKER_MAX)
        || (b == Rank::NINE && a.ordinal() <= NINE_KICKER_MAX);
    folds.then_some(Verdict::Fold)
}

/// Run the hand through the decision list.
pub fn fold_decision(hand: Hand) -> FoldDecision {
    let (a, b) = (hand[0].rank, hand[1].rank);
    for rule in &FOLD_RULES {
        if let Some(verdict) = (rule.check)(a, b) {
            log::trace!("{}{} decided by {}: {:?}", hand[0], hand[1], rule.name, verdict);
            return FoldDecision { verdict, rule: Some(rule.name) };
        }
    }
    FoldDecision { verdict: Verdict::Play, rule: None }
}

pub fn should_fold(hand: Hand) -> bool {
    fold_decision(hand).folds()
}
