//! Prop slate supply.
//!
//! Defines the `PropSource` trait the ranker's callers load props through,
//! plus the built-in sample slate and a JSON file source. The ranker itself
//! only ever sees a `&[PlayerProp]`.

pub mod json;
pub mod sample;

use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::info;

use crate::strategy::odds::checked_american_to_decimal;
use crate::types::{PlayerProp, RankerError, Sport};

pub use json::JsonSlate;
pub use sample::SampleSlate;

/// Abstraction over wherever the slate comes from.
#[cfg_attr(test, mockall::automock)]
pub trait PropSource: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> String;

    /// Produce the full, read-only prop slate.
    fn load(&self) -> Result<Vec<PlayerProp>>;
}

/// Load a slate from `source`, logging a per-sport breakdown.
pub fn load_slate(source: &dyn PropSource) -> Result<Vec<PlayerProp>> {
    let name = source.name();
    let props = source
        .load()
        .with_context(|| format!("Failed to load slate from {name}"))?;

    for sport in Sport::ALL {
        let count = props.iter().filter(|p| p.sport == *sport).count();
        if count > 0 {
            info!(source = %name, sport = %sport, props = count, "Slate sport loaded");
        }
    }
    info!(source = %name, props = props.len(), "Slate loaded");

    Ok(props)
}

/// Check a slate against the odds and probability conventions.
///
/// Ids must be unique (parlay ids are built from them), every probability
/// must lie strictly inside (0, 1), and every price must be a valid
/// American price.
pub fn validate_props(props: &[PlayerProp]) -> Result<(), RankerError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(props.len());

    for prop in props {
        if !seen.insert(prop.id.as_str()) {
            return Err(RankerError::DuplicatePropId(prop.id.clone()));
        }
        let p = prop.implied_probability;
        if !(p > 0.0 && p < 1.0) {
            return Err(RankerError::InvalidProbability {
                id: prop.id.clone(),
                probability: p,
            });
        }
        checked_american_to_decimal(prop.odds_american)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
