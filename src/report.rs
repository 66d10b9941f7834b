//! Plain-text rendering of ranked parlays.
//!
//! The ranker hands out raw numbers (fractions, multipliers, currency
//! magnitudes); everything human-facing is formatted here.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use std::fmt;

use crate::types::RankedParlay;

/// Disclaimer printed under every report.
pub const FOOTNOTE: &str =
    "Estimates use assumed probabilities and typical payout ladders; for information only. Not betting advice.";

/// `0.56` → `"56.0%"`.
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// `150` → `"+150"`, `-110` → `"-110"`.
pub fn format_american(odds: i32) -> String {
    if odds > 0 {
        format!("+{odds}")
    } else {
        format!("{odds}")
    }
}

/// Round a currency amount to cents, midpoint away from zero.
pub fn round_currency(amount: f64) -> Option<Decimal> {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// `5.0` → `"$5.00"`, `-1.5` → `"-$1.50"`.
pub fn format_currency(amount: f64) -> String {
    match round_currency(amount) {
        Some(d) if d.is_sign_negative() && !d.is_zero() => format!("-${:.2}", d.abs()),
        Some(d) => format!("${:.2}", d.abs()),
        None => format!("${amount:.2}"),
    }
}

/// Card view of a single ranked parlay.
pub struct ParlayCard<'a>(pub &'a RankedParlay);

impl fmt::Display for ParlayCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        writeln!(f, "#{} · {}-Leg Parlay [{}]", p.rank, p.leg_count(), p.sport)?;
        writeln!(
            f,
            "  EV {} | Win% {} | Payout x{:.2} | Risk: {}",
            format_pct(p.expected_value_pct),
            format_pct(p.win_probability),
            p.payout_multiplier,
            p.risk,
        )?;
        for leg in &p.legs {
            let prop = &leg.prop;
            writeln!(
                f,
                "  - {} · {} {} {} | Implied {} · Odds {} | Edge {}",
                prop.player,
                prop.market,
                prop.selection,
                prop.line,
                format_pct(prop.implied_probability),
                format_american(prop.odds_american),
                format_pct(leg.edge_pct),
            )?;
        }
        write!(
            f,
            "  Suggested stake {} · Est. profit {}",
            format_currency(p.suggested_stake),
            format_currency(p.estimated_profit),
        )
    }
}

/// Full text report: title, optional slate date, one card per parlay,
/// then the disclaimer.
pub fn render_report(parlays: &[RankedParlay], slate_date: Option<NaiveDate>) -> String {
    let mut out = String::from("Best Player Parlays\n");
    match slate_date {
        Some(date) => out.push_str(&format!("{} · EV-ranked suggestions\n", date.format("%A, %B %-d, %Y"))),
        None => out.push_str("EV-ranked suggestions\n"),
    }
    out.push('\n');

    if parlays.is_empty() {
        out.push_str("No positive-EV parlays on this slate.\n\n");
    }
    for parlay in parlays {
        out.push_str(&ParlayCard(parlay).to_string());
        out.push_str("\n\n");
    }

    out.push_str(FOOTNOTE);
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
