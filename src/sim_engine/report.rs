//! Plain-text transcripts for rounds and win-rate reports.
//!
//! Blank lines and punctuation are part of the format.

use std::fmt::Write;

use crate::sim_engine::{
    aggregator::{CategoryRate, Snapshot},
    models::{Card, Outcome, RoundResult},
};

/// Format cards as a space-separated string (e.g. "Ac Ks 7h").
pub fn cards_str(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

/// Print a rounded percentage the way a shortest-repr float prints:
/// `45.3`, `33.33`, and `50.0` rather than `50`.
pub fn format_rate(rate: f64) -> String {
    let s = rate.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

/// `10000` → `10,000`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full transcript of one round: hands, board and result.
pub fn render_round(result: &RoundResult) -> String {
    let mut out = String::from("\n=== Poker Round Simulation ===\n\n");
    for seat in &result.seats {
        let status = if seat.folds { "(FOLDS)" } else { "(PLAYS)" };
        let _ = writeln!(out, "Player {}: {} {}", seat.index + 1, cards_str(&seat.hand), status);
    }
    let _ = writeln!(out, "\nTable Cards: {}", cards_str(&result.board));

    match &result.outcome {
        Outcome::NotEnoughPlayers => {
            out.push_str("\nNot enough players to continue the hand (everyone folded).\n");
        }
        Outcome::Winners(winners) => {
            out.push_str("\nResults:\n");
            if let [only] = winners.as_slice() {
                let _ = writeln!(out, "Player {} wins the hand!", only + 1);
            } else {
                let names: Vec<String> = winners.iter().map(|w| format!("Player {}", w + 1)).collect();
                let _ = writeln!(out, "It's a tie between: {}", names.join(", "));
            }
        }
    }
    out
}

fn render_rates(out: &mut String, rates: &[CategoryRate]) {
    for rate in rates {
        let _ = writeln!(out, "{}: {}%", rate.category, format_rate(rate.win_rate));
    }
}

/// Interim report for a run still in progress.
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let mut out = format!("\nAfter {} simulations:\n", snapshot.rounds);
    render_rates(&mut out, &snapshot.rates);
    out
}

/// Closing report for a finished run.
pub fn render_final(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "\nFinal Win Rates by Hand Type (out of {} games):\n",
        group_thousands(snapshot.rounds)
    );
    render_rates(&mut out, &snapshot.rates);
    out
}
