//! Risk tiering.
//!
//! Maps a parlay's joint win probability onto an ordered tier. Thresholds
//! are checked top-down: Low first, then Medium, else High.

use crate::types::RiskTier;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskConfig {
    /// Minimum win probability for `Low`.
    pub low_min_win_prob: f64,
    /// Minimum win probability for `Medium`.
    pub medium_min_win_prob: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_min_win_prob: 0.45,
            medium_min_win_prob: 0.25,
        }
    }
}

impl RiskConfig {
    pub fn classify(&self, win_probability: f64) -> RiskTier {
        if win_probability >= self.low_min_win_prob {
            RiskTier::Low
        } else if win_probability >= self.medium_min_win_prob {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}
