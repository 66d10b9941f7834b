//! JSON slate file source.
//!
//! Reads a JSON array of props (snake_case fields, league and stat enums by
//! name) and validates it before handing it to the ranker.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use super::{validate_props, PropSource};
use crate::types::PlayerProp;

/// Prop slate stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonSlate {
    path: PathBuf,
}

impl JsonSlate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PropSource for JsonSlate {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<PlayerProp>> {
        let path = self.path.display();

        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read slate file {path}"))?;

        let props: Vec<PlayerProp> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse slate file {path}"))?;

        validate_props(&props).with_context(|| format!("Invalid slate in {path}"))?;

        debug!(path = %path, props = props.len(), "Slate file parsed");
        Ok(props)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
