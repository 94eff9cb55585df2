// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: weights and the season vocabulary.
//!
//! Layering, lowest to highest: built-in defaults, JSON config file,
//! `COURSEDEX_*` environment variables, CLI flags. The pipeline takes the
//! resolved `SearchConfig` by value; nothing reads globals at query time.
//!
//! # Constants
//!
//! | Knob        | Default | Note                                     |
//! |-------------|---------|------------------------------------------|
//! | Title       | 100     | 10x description, title is the main signal|
//! | Description | 10      |                                          |
//! | Seasons     | 4       | spring, summer, autumn, winter           |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Score added per title hit (token or cumulative prefix).
pub const TITLE_WEIGHT: u32 = 100;

/// Score added per description hit (token or cumulative prefix).
pub const DESCRIPTION_WEIGHT: u32 = 10;

/// Season keywords recognized in queries by default.
pub const DEFAULT_SEASONS: [&str; 4] = ["spring", "summer", "autumn", "winter"];

pub const ENV_TITLE_WEIGHT: &str = "COURSEDEX_TITLE_WEIGHT";
pub const ENV_DESCRIPTION_WEIGHT: &str = "COURSEDEX_DESCRIPTION_WEIGHT";
pub const ENV_SEASONS: &str = "COURSEDEX_SEASONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub title_weight: u32,
    pub description_weight: u32,
    /// Lowercase, whitespace-free labels. Empty disables season filtering.
    pub seasons: BTreeSet<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: TITLE_WEIGHT,
            description_weight: DESCRIPTION_WEIGHT,
            seasons: DEFAULT_SEASONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SearchConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| Error::InvalidConfig(format!("config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Apply `COURSEDEX_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(ENV_TITLE_WEIGHT) {
            self.title_weight = parse_weight(ENV_TITLE_WEIGHT, &raw)?;
        }
        if let Some(raw) = read(ENV_DESCRIPTION_WEIGHT) {
            self.description_weight = parse_weight(ENV_DESCRIPTION_WEIGHT, &raw)?;
        }
        if let Some(raw) = read(ENV_SEASONS) {
            self.seasons = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self.validate()?;
        Ok(self)
    }

    /// A season label must be able to equal a lowercase query token.
    pub fn validate(&self) -> Result<()> {
        for season in &self.seasons {
            if season.is_empty() {
                return Err(Error::InvalidConfig("empty season label".into()));
            }
            if season.chars().any(char::is_whitespace) {
                return Err(Error::InvalidConfig(format!(
                    "season label {:?} contains whitespace",
                    season
                )));
            }
            if *season != season.to_lowercase() {
                return Err(Error::InvalidConfig(format!(
                    "season label {:?} must be lowercase",
                    season
                )));
            }
        }
        Ok(())
    }
}

fn parse_weight(name: &str, raw: &str) -> Result<u32> {
    raw.parse::<u32>()
        .map_err(|_| Error::InvalidConfig(format!("invalid {}: {} (expected u32)", name, raw)))
}
