//! Configuration loading from TOML.
//!
//! Reads `config.toml` (path overridable via `PARLAY_CONFIG`) and
//! deserializes into strongly-typed structs. Every section is defaulted, so
//! a partial or missing file still yields a usable configuration.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::slate::{JsonSlate, PropSource, SampleSlate};
use crate::strategy::kelly::StakeSizer;
use crate::strategy::risk::RiskConfig;
use crate::strategy::{ParlayRanker, RankConfig};
use crate::types::RankerError;

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "PARLAY_CONFIG";

/// Config file read when `PARLAY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ranker: RankerConfig,
    pub slate: SlateConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RankerConfig {
    pub max_legs: usize,
    pub top_n: usize,
    /// Nominal bankroll stakes are sized against.
    pub bankroll: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            max_legs: 3,
            top_n: 8,
            bankroll: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SlateConfig {
    /// JSON slate file. Absent means the built-in sample slate.
    pub path: Option<String>,
    /// Game day shown in the report header.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub enabled: bool,
    pub port: u16,
    /// Upper bound on `max_legs` accepted from HTTP queries.
    pub max_legs_cap: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: 3000,
            max_legs_cap: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            warn!(path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Config path from `PARLAY_CONFIG`, or `config.toml`.
    pub fn path_from_env() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Reject settings the binary cannot run with.
    pub fn validate(&self) -> Result<(), RankerError> {
        self.rank_config().validate()?;
        if !(self.ranker.bankroll > 0.0) {
            return Err(RankerError::InvalidConfig(format!(
                "bankroll must be positive, got {}",
                self.ranker.bankroll
            )));
        }
        if self.dashboard.max_legs_cap < self.ranker.max_legs {
            return Err(RankerError::InvalidConfig(format!(
                "dashboard.max_legs_cap ({}) is below ranker.max_legs ({})",
                self.dashboard.max_legs_cap, self.ranker.max_legs
            )));
        }
        Ok(())
    }

    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            max_legs: self.ranker.max_legs,
            top_n: self.ranker.top_n,
        }
    }

    /// Ranker sized against the configured bankroll.
    pub fn build_ranker(&self) -> ParlayRanker {
        ParlayRanker::new(
            StakeSizer::with_bankroll(self.ranker.bankroll),
            RiskConfig::default(),
        )
    }

    /// The configured slate source.
    pub fn prop_source(&self) -> Box<dyn PropSource> {
        match &self.slate.path {
            Some(path) => Box::new(JsonSlate::new(path)),
            None => Box::new(SampleSlate),
        }
    }
}
