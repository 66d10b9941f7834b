//! Shared types for the parlay ranker.
//!
//! These types form the data model used across all modules. Inputs
//! (`PlayerProp`) are read-only; `ParlayLeg` and `RankedParlay` are built
//! fresh per ranking call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// League a prop belongs to. Parlays never mix leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "NHL")]
    Nhl,
}

impl Sport {
    /// All known sports (useful for iteration).
    pub const ALL: &'static [Sport] = &[Sport::Nba, Sport::Nhl];
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Nba => write!(f, "NBA"),
            Sport::Nhl => write!(f, "NHL"),
        }
    }
}

/// Attempt to parse a string into a Sport (case-insensitive).
impl std::str::FromStr for Sport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nba" | "basketball" => Ok(Sport::Nba),
            "nhl" | "hockey" => Ok(Sport::Nhl),
            _ => Err(anyhow::anyhow!("Unknown sport: {s}")),
        }
    }
}

/// Stat category the prop line is set on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropMarket {
    Points,
    Assists,
    Rebounds,
    Shots,
    Saves,
}

impl fmt::Display for PropMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropMarket::Points => write!(f, "Points"),
            PropMarket::Assists => write!(f, "Assists"),
            PropMarket::Rebounds => write!(f, "Rebounds"),
            PropMarket::Shots => write!(f, "Shots"),
            PropMarket::Saves => write!(f, "Saves"),
        }
    }
}

/// Which side of the line the prop backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    Over,
    Under,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Over => write!(f, "Over"),
            Selection::Under => write!(f, "Under"),
        }
    }
}

/// Risk tier, derived solely from a parlay's joint win probability.
/// Ordered from safest to riskiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// One player-prop betting opportunity on the slate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProp {
    pub id: String,
    pub sport: Sport,
    pub player: String,
    pub team: String,
    pub opponent: String,
    pub market: PropMarket,
    pub selection: Selection,
    /// Threshold the stat is measured against.
    pub line: f64,
    /// Bookmaker price, American convention (+150, -110, ...).
    pub odds_american: i32,
    /// Our estimate of the true win probability, in (0, 1).
    pub implied_probability: f64,
}

impl fmt::Display for PlayerProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {} {} ({:+}, p={:.1}%)",
            self.sport,
            self.player,
            self.market,
            self.selection,
            self.line,
            self.odds_american,
            self.implied_probability * 100.0,
        )
    }
}

impl PlayerProp {
    /// Helper to build a test/sample prop with sensible defaults.
    #[cfg(test)]
    pub fn sample(id: &str, sport: Sport, odds_american: i32, implied_probability: f64) -> Self {
        PlayerProp {
            id: id.to_string(),
            sport,
            player: format!("Player {id}"),
            team: "AAA".to_string(),
            opponent: "BBB".to_string(),
            market: PropMarket::Points,
            selection: Selection::Over,
            line: 20.5,
            odds_american,
            implied_probability,
        }
    }
}

/// A prop as it sits inside a parlay, carrying its own standalone edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParlayLeg {
    #[serde(flatten)]
    pub prop: PlayerProp,
    /// `implied_probability × decimal_odds − 1` for this leg alone.
    pub edge_pct: f64,
}

impl ParlayLeg {
    pub fn sport(&self) -> Sport {
        self.prop.sport
    }
}

// ---------------------------------------------------------------------------
// Ranked output
// ---------------------------------------------------------------------------

/// A positive-EV, same-sport parlay with its final position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedParlay {
    /// Leg ids joined in combination order.
    pub id: String,
    pub sport: Sport,
    pub legs: Vec<ParlayLeg>,
    /// Joint probability of every leg hitting (legs assumed independent).
    pub win_probability: f64,
    /// Product of the legs' decimal odds.
    pub payout_multiplier: f64,
    /// `win_probability × payout_multiplier − 1`.
    pub expected_value_pct: f64,
    pub suggested_stake: f64,
    pub estimated_profit: f64,
    pub risk: RiskTier,
    /// 1-based position after filtering, sorting and truncation.
    pub rank: usize,
}

impl fmt::Display for RankedParlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] EV={:+.1}% win={:.1}% x{:.2} risk={} stake=${:.2}",
            self.rank,
            self.id,
            self.sport,
            self.expected_value_pct * 100.0,
            self.win_probability * 100.0,
            self.payout_multiplier,
            self.risk,
            self.suggested_stake,
        )
    }
}

impl RankedParlay {
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Whether every leg shares the parlay's sport.
    pub fn is_same_sport(&self) -> bool {
        self.legs.iter().all(|l| l.sport() == self.sport)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the ranker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankerError {
    #[error("Invalid American odds: {0} (magnitude must be at least 100)")]
    InvalidOdds(i32),

    #[error("Invalid probability for prop {id}: {probability} (must be in (0, 1))")]
    InvalidProbability { id: String, probability: f64 },

    #[error("Duplicate prop id: {0}")]
    DuplicatePropId(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Ranking deadline exceeded after {evaluated} combinations")]
    DeadlineExceeded { evaluated: usize },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
