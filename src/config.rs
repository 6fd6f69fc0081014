//! Playground configuration.
//!
//! Every key is optional; a missing file section falls back to the values the
//! demos were written against, so `PlaygroundConfig::default()` reproduces the
//! documented results exactly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
    pub pricing: PricingConfig,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            pricing: PricingConfig::default(),
        }
    }
}

/// Import surcharges applied by the car cost adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub customs_per_horsepower: i64,
    pub sos_system: i64,
    pub scrap_collection: i64,
    pub force_majeure: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            customs_per_horsepower: 3_000,
            sos_system: 40_000,
            scrap_collection: 35_000,
            force_majeure: 80_000,
        }
    }
}

impl PricingConfig {
    pub fn fixed_surcharges(&self) -> i64 {
        self.sos_system.saturating_add(self.scrap_collection)
    }
}

impl PlaygroundConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(PlaygroundError::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PlaygroundError::config_read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded playground config");
        Ok(config)
    }
}
