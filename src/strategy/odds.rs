//! Odds conversion and single-leg edge.
//!
//! American prices are converted to decimal payout multipliers (stake
//! included). Prices in (-100, 100) are outside the American convention;
//! `american_to_decimal` does not guard against them and will return a
//! meaningless multiplier (or infinity for 0). Callers that need a hard
//! contract use `checked_american_to_decimal`.

use crate::types::RankerError;

/// Convert an American price to a decimal payout multiplier.
///
/// `+150` → `2.5`, `-110` → `1.9090…`.
pub fn american_to_decimal(american: i32) -> f64 {
    if american > 0 {
        1.0 + american as f64 / 100.0
    } else {
        1.0 + 100.0 / (american as f64).abs()
    }
}

/// Like `american_to_decimal`, but rejects prices with magnitude below 100.
pub fn checked_american_to_decimal(american: i32) -> Result<f64, RankerError> {
    if american.unsigned_abs() < 100 {
        return Err(RankerError::InvalidOdds(american));
    }
    Ok(american_to_decimal(american))
}

/// EV margin of a single bet relative to stake: `prob × odds − 1`.
pub fn edge(probability: f64, decimal_odds: f64) -> f64 {
    probability * decimal_odds - 1.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_price() {
        assert_eq!(american_to_decimal(150), 2.5);
        assert_eq!(american_to_decimal(100), 2.0);
    }

    #[test]
    fn test_negative_price() {
        assert!((american_to_decimal(-110) - 1.909_090_9).abs() < 1e-6);
        assert_eq!(american_to_decimal(-200), 1.5);
        assert_eq!(american_to_decimal(-100), 2.0);
    }

    #[test]
    fn test_unguarded_gap_is_not_fixed() {
        // Outside the convention the formula is applied as-is.
        assert_eq!(american_to_decimal(50), 1.5);
        assert!(american_to_decimal(0).is_infinite());
    }

    #[test]
    fn test_checked_conversion() {
        assert_eq!(checked_american_to_decimal(150), Ok(2.5));
        assert_eq!(checked_american_to_decimal(-99), Err(RankerError::InvalidOdds(-99)));
        assert_eq!(checked_american_to_decimal(0), Err(RankerError::InvalidOdds(0)));
        assert!(checked_american_to_decimal(-100).is_ok());
    }

    #[test]
    fn test_edge() {
        // 56% at -110 is a positive edge
        let e = edge(0.56, american_to_decimal(-110));
        assert!((e - 0.069_090_9).abs() < 1e-6);
        // coin flip at even money is exactly zero
        assert_eq!(edge(0.5, 2.0), 0.0);
        // zero probability loses the stake
        assert_eq!(edge(0.0, 3.0), -1.0);
    }
}
