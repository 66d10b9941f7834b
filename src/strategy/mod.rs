//! Strategy engine — combination enumeration, parlay evaluation and ranking.

pub mod combinations;
pub mod kelly;
pub mod odds;
pub mod risk;

use std::time::Instant;
use tracing::{debug, info, warn};

use crate::types::{ParlayLeg, PlayerProp, RankedParlay, RankerError, RiskTier, Sport};
use combinations::{total_combinations, Combinations};
use kelly::StakeSizer;
use risk::RiskConfig;

/// Separator between leg ids in a parlay id.
pub const PARLAY_ID_SEPARATOR: &str = "-";

/// Combinations evaluated between deadline checks.
const DEADLINE_CHECK_INTERVAL: usize = 1024;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Per-call ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankConfig {
    /// Largest parlay size considered (smallest is always 2).
    pub max_legs: usize,
    /// Maximum number of parlays returned.
    pub top_n: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_legs: 3,
            top_n: 8,
        }
    }
}

impl RankConfig {
    /// Strict boundary check. Ranking itself never calls this: a
    /// `max_legs` below 2 simply produces nothing.
    pub fn validate(&self) -> Result<(), RankerError> {
        if self.max_legs < 2 {
            return Err(RankerError::InvalidConfig(format!(
                "max_legs must be at least 2, got {}",
                self.max_legs
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// A fully priced same-sport combination that has not been ranked yet.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedParlay {
    pub id: String,
    pub sport: Sport,
    pub legs: Vec<ParlayLeg>,
    pub win_probability: f64,
    pub payout_multiplier: f64,
    pub expected_value_pct: f64,
    pub suggested_stake: f64,
    pub estimated_profit: f64,
    pub risk: RiskTier,
}

impl EvaluatedParlay {
    fn into_ranked(self, rank: usize) -> RankedParlay {
        RankedParlay {
            id: self.id,
            sport: self.sport,
            legs: self.legs,
            win_probability: self.win_probability,
            payout_multiplier: self.payout_multiplier,
            expected_value_pct: self.expected_value_pct,
            suggested_stake: self.suggested_stake,
            estimated_profit: self.estimated_profit,
            risk: self.risk,
            rank,
        }
    }
}

/// Ranked output plus counters describing what the pass discarded.
#[derive(Debug, Clone, Default)]
pub struct RankingReport {
    pub parlays: Vec<RankedParlay>,
    pub combinations_evaluated: usize,
    pub cross_sport_skipped: usize,
    pub non_positive_ev: usize,
    pub positive_ev: usize,
}

// ---------------------------------------------------------------------------
// Ranker
// ---------------------------------------------------------------------------

/// Pipelines enumeration → same-sport filter → pricing → positive-EV filter
/// → sort → truncate → rank.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct ParlayRanker {
    stake: StakeSizer,
    risk: RiskConfig,
}

impl ParlayRanker {
    pub fn new(stake: StakeSizer, risk: RiskConfig) -> Self {
        Self { stake, risk }
    }

    pub fn stake_sizer(&self) -> &StakeSizer {
        &self.stake
    }

    /// Price a single combination. Returns `None` for an empty or
    /// cross-sport combination.
    pub fn evaluate(&self, combo: &[&PlayerProp]) -> Option<EvaluatedParlay> {
        let sport = combo.first()?.sport;
        if !combo.iter().all(|p| p.sport == sport) {
            return None;
        }

        let decimals: Vec<f64> = combo
            .iter()
            .map(|p| odds::american_to_decimal(p.odds_american))
            .collect();

        let payout_multiplier: f64 = decimals.iter().product();
        let win_probability: f64 = combo.iter().map(|p| p.implied_probability).product();
        let expected_value_pct = win_probability * payout_multiplier - 1.0;

        let legs: Vec<ParlayLeg> = combo
            .iter()
            .zip(&decimals)
            .map(|(p, &decimal)| ParlayLeg {
                prop: (*p).clone(),
                edge_pct: odds::edge(p.implied_probability, decimal),
            })
            .collect();

        let suggested_stake = self.stake.suggested_stake(expected_value_pct);
        let estimated_profit = self.stake.estimated_profit(suggested_stake, expected_value_pct);

        let id = combo
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>()
            .join(PARLAY_ID_SEPARATOR);

        Some(EvaluatedParlay {
            id,
            sport,
            legs,
            win_probability,
            payout_multiplier,
            expected_value_pct,
            suggested_stake,
            estimated_profit,
            risk: self.risk.classify(win_probability),
        })
    }

    /// Rank every positive-EV same-sport parlay of 2..=`max_legs` legs and
    /// return the best `top_n`, EV descending.
    ///
    /// Degenerate input (empty slate, `max_legs < 2`, `top_n == 0`) yields
    /// an empty result rather than an error.
    pub fn rank(&self, props: &[PlayerProp], config: &RankConfig) -> Vec<RankedParlay> {
        self.run(props, config, None)
            .map(|report| report.parlays)
            .unwrap_or_default()
    }

    /// Same ranking as `rank`, with pass counters and an optional deadline.
    ///
    /// The deadline is polled every `DEADLINE_CHECK_INTERVAL` combinations;
    /// once it has passed the call fails and nothing is returned.
    pub fn rank_with_report(
        &self,
        props: &[PlayerProp],
        config: &RankConfig,
        deadline: Option<Instant>,
    ) -> Result<RankingReport, RankerError> {
        self.run(props, config, deadline)
    }

    fn run(
        &self,
        props: &[PlayerProp],
        config: &RankConfig,
        deadline: Option<Instant>,
    ) -> Result<RankingReport, RankerError> {
        let mut report = RankingReport::default();
        let mut candidates: Vec<EvaluatedParlay> = Vec::new();

        debug!(
            props = props.len(),
            max_legs = config.max_legs,
            top_n = config.top_n,
            combinations = total_combinations(props.len(), config.max_legs),
            "Enumerating parlays"
        );

        for k in 2..=config.max_legs.min(props.len()) {
            for combo in Combinations::new(props, k) {
                if let Some(deadline) = deadline {
                    if report.combinations_evaluated % DEADLINE_CHECK_INTERVAL == 0
                        && Instant::now() >= deadline
                    {
                        warn!(
                            evaluated = report.combinations_evaluated,
                            "Ranking deadline exceeded"
                        );
                        return Err(RankerError::DeadlineExceeded {
                            evaluated: report.combinations_evaluated,
                        });
                    }
                }
                report.combinations_evaluated += 1;

                match self.evaluate(&combo) {
                    None => report.cross_sport_skipped += 1,
                    Some(parlay) if parlay.expected_value_pct > 0.0 => {
                        report.positive_ev += 1;
                        candidates.push(parlay);
                    }
                    Some(_) => report.non_positive_ev += 1,
                }
            }
        }

        // Vec::sort_by is stable: exact EV ties keep enumeration order.
        candidates.sort_by(|a, b| b.expected_value_pct.total_cmp(&a.expected_value_pct));
        candidates.truncate(config.top_n);

        report.parlays = candidates
            .into_iter()
            .enumerate()
            .map(|(i, parlay)| parlay.into_ranked(i + 1))
            .collect();

        info!(
            evaluated = report.combinations_evaluated,
            cross_sport = report.cross_sport_skipped,
            non_positive_ev = report.non_positive_ev,
            positive_ev = report.positive_ev,
            returned = report.parlays.len(),
            "Ranking complete"
        );

        Ok(report)
    }
}

/// Rank parlays from `props` with the default bankroll and risk thresholds.
pub fn rank_parlays(props: &[PlayerProp], config: &RankConfig) -> Vec<RankedParlay> {
    ParlayRanker::default().rank(props, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
