//! Stake sizing.
//!
//! A half-EV fraction of a nominal bankroll, floored at zero and hard-capped
//! at 5%. This is a display heuristic in the spirit of fractional Kelly, not
//! a bankroll optimiser: it ignores the payout ratio entirely.

use tracing::debug;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Stake sizing configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeConfig {
    /// Nominal bankroll the fraction is applied to.
    pub bankroll: f64,
    /// Share of the EV margin staked (0.5 = half).
    pub ev_fraction: f64,
    /// Maximum stake as a fraction of bankroll.
    pub max_fraction: f64,
}

impl Default for StakeConfig {
    fn default() -> Self {
        Self {
            bankroll: 100.0,
            ev_fraction: 0.5,
            max_fraction: 0.05,
        }
    }
}

// ---------------------------------------------------------------------------
// Sizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct StakeSizer {
    config: StakeConfig,
}

impl StakeSizer {
    pub fn new(config: StakeConfig) -> Self {
        Self { config }
    }

    /// Sizer with default fractions over a custom bankroll.
    pub fn with_bankroll(bankroll: f64) -> Self {
        Self::new(StakeConfig {
            bankroll,
            ..StakeConfig::default()
        })
    }

    /// Access the stake configuration.
    pub fn config(&self) -> &StakeConfig {
        &self.config
    }

    /// Fraction of bankroll to stake for a given EV margin.
    pub fn stake_fraction(&self, expected_value_pct: f64) -> f64 {
        (expected_value_pct * self.config.ev_fraction).clamp(0.0, self.config.max_fraction)
    }

    /// Suggested stake in currency units. Never negative.
    pub fn suggested_stake(&self, expected_value_pct: f64) -> f64 {
        let fraction = self.stake_fraction(expected_value_pct);
        let stake = self.config.bankroll * fraction;

        debug!(
            ev = format!("{:.2}%", expected_value_pct * 100.0),
            fraction = format!("{:.2}%", fraction * 100.0),
            stake = format!("${:.2}", stake),
            "Stake sized"
        );

        stake
    }

    /// Expected profit of staking `stake` at the given EV margin.
    pub fn estimated_profit(&self, stake: f64, expected_value_pct: f64) -> f64 {
        stake * expected_value_pct
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
