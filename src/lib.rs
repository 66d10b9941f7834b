//! Parlay ranker — EV-ranked same-sport player-prop parlays.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point. The ranking core (`strategy`) is pure and
//! synchronous; `slate`, `report` and `dashboard` sit around it.

pub mod config;
pub mod dashboard;
pub mod report;
pub mod slate;
pub mod strategy;
pub mod types;

pub use strategy::{rank_parlays, ParlayRanker, RankConfig};
pub use types::{ParlayLeg, PlayerProp, RankedParlay, RankerError, RiskTier};
