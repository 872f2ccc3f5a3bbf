//! Multi-round win-rate aggregation by starting-hand category.
//!
//! Every resolved round adds one play to each distinct category that had an
//! active player, and splits the win among the winning seats: a winning
//! seat hands its category `1 / n`, where `n` is the number of winning seats
//! sharing that category. A category that wins a round therefore collects
//! exactly one credit for it, however many of its hands tied.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sim_engine::{
    config::SimConfig,
    error::SimError,
    models::{HandCategory, Outcome, RoundResult},
    round::play_round,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub plays: u64,
    pub win_credit: f64,
}

impl CategoryStats {
    /// Win percentage rounded to two decimals; `None` before the first play.
    pub fn win_rate(&self) -> Option<f64> {
        (self.plays > 0).then(|| round2(self.win_credit / self.plays as f64 * 100.0))
    }
}

/// Round to two decimals on the exact binary value, ties to even.
///
/// `(x * 100.0).round()` would round the already-inexact product and push
/// exact halves such as 40.625 away from zero.
fn round2(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let bits = x.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    if exp >= 0 {
        return x;
    }
    let shift = exp.unsigned_abs();
    if shift >= 127 {
        return 0.0_f64.copysign(x);
    }

    // |x| * 100 == mantissa * 100 / 2^shift, exactly.
    let scaled = u128::from(mantissa) * 100;
    let quotient = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let hundredths = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    (hundredths as f64 / 100.0).copysign(x)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub category: HandCategory,
    pub plays: u64,
    pub win_credit: f64,
    pub win_rate: f64,
}

/// Running per-category counters for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    stats: BTreeMap<HandCategory, CategoryStats>,
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    /// Fold one round into the tally. Returns `false` for rounds that never
    /// reached a showdown, which leave the counters untouched.
    pub fn record(&mut self, result: &RoundResult) -> bool {
        if !matches!(result.outcome, Outcome::Winners(_)) {
            return false;
        }
        let present: BTreeSet<HandCategory> = result.active_seats().map(|s| s.category).collect();
        for category in present {
            self.stats.entry(category).or_default().plays += 1;
        }
        for (category, credit) in win_credit_split(result) {
            self.stats.entry(category).or_default().win_credit += credit;
        }
        true
    }

    /// Counters for one category; zeroed if it never played.
    pub fn stats(&self, category: HandCategory) -> CategoryStats {
        self.stats.get(&category).copied().unwrap_or_default()
    }

    /// Rates for every category played at least once, in category order.
    pub fn rates(&self) -> Vec<CategoryRate> {
        self.stats
            .iter()
            .filter_map(|(&category, stats)| {
                stats.win_rate().map(|win_rate| CategoryRate {
                    category,
                    plays: stats.plays,
                    win_credit: stats.win_credit,
                    win_rate,
                })
            })
            .collect()
    }
}

/// Credit owed to each winning category for a single round.
pub fn win_credit_split(result: &RoundResult) -> BTreeMap<HandCategory, f64> {
    let mut counts: BTreeMap<HandCategory, u32> = BTreeMap::new();
    for seat in result.winning_seats() {
        *counts.entry(seat.category).or_insert(0) += 1;
    }
    let mut credit = BTreeMap::new();
    for seat in result.winning_seats() {
        *credit.entry(seat.category).or_insert(0.0) += 1.0 / f64::from(counts[&seat.category]);
    }
    credit
}

/// Win rates after a given number of rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rounds: u64,
    pub rates: Vec<CategoryRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rounds: u64,
    /// Rounds with at least two active players.
    pub resolved: u64,
    /// Rounds abandoned because too many players folded.
    pub unresolved: u64,
    pub final_rates: Snapshot,
}

/// Play `config.rounds` rounds, calling `on_snapshot` every
/// `config.report_every` rounds.
pub fn run_simulation<R, F>(config: &SimConfig, rng: &mut R, mut on_snapshot: F) -> Result<RunSummary, SimError>
where
    R: Rng,
    F: FnMut(&Snapshot),
{
    config.validate()?;
    log::info!("simulating {} rounds, snapshot every {}", config.rounds, config.report_every);

    let mut tally = Tally::new();
    let mut resolved = 0u64;
    for round in 1..=config.rounds {
        let result = play_round(rng)?;
        if tally.record(&result) {
            resolved += 1;
        }
        if round % config.report_every == 0 {
            let snapshot = Snapshot { rounds: round, rates: tally.rates() };
            log::info!("snapshot after {round} rounds ({resolved} resolved)");
            on_snapshot(&snapshot);
        }
    }

    let summary = RunSummary {
        rounds: config.rounds,
        resolved,
        unresolved: config.rounds - resolved,
        final_rates: Snapshot { rounds: config.rounds, rates: tally.rates() },
    };
    log::info!("finished: {} resolved, {} unresolved", summary.resolved, summary.unresolved);
    Ok(summary)
}
