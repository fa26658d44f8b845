// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! Three scalars, passed in at call time. Defaults are documented constants;
//! a JSON file can override any subset of them, and the file path can come
//! from the `PHRASEFIND_CONFIG` environment variable.
//!
//! ```json
//! { "decay_rate": 2.0, "max_results": 5, "score_cutoff": 0.05 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Default decay constant for word similarity.
///
/// At 2.0 a one-letter typo in a three-letter word still scores
/// `exp(-2/3) ≈ 0.51`, far above the default cutoff.
pub const DEFAULT_DECAY_RATE: f64 = 2.0;

/// Default number of results returned.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default minimum phrase score.
pub const DEFAULT_SCORE_CUTOFF: f64 = 0.05;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "PHRASEFIND_CONFIG";

/// Parameters for one ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankConfig {
    /// Word similarity decay constant. Must be finite and > 0.
    pub decay_rate: f64,
    /// Maximum results returned. Must be >= 1.
    pub max_results: usize,
    /// Minimum phrase score kept. Must be finite and >= 0.
    pub score_cutoff: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            decay_rate: DEFAULT_DECAY_RATE,
            max_results: DEFAULT_MAX_RESULTS,
            score_cutoff: DEFAULT_SCORE_CUTOFF,
        }
    }
}

impl RankConfig {
    pub fn with_decay_rate(mut self, decay_rate: f64) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_score_cutoff(mut self, score_cutoff: f64) -> Self {
        self.score_cutoff = score_cutoff;
        self
    }

    /// Reject values that would produce meaningless scores.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.decay_rate.is_finite() && self.decay_rate > 0.0) {
            return Err(Error::InvalidDecayRate(self.decay_rate));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidMaxResults(self.max_results));
        }
        if !(self.score_cutoff.is_finite() && self.score_cutoff >= 0.0) {
            return Err(Error::InvalidScoreCutoff(self.score_cutoff));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing keys keep their defaults.
    ///
    /// `origin` only labels errors.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, Error> {
        let config: RankConfig = serde_json::from_str(json).map_err(|source| Error::Json {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults when unset.
    pub fn from_env() -> Result<Self, Error> {
        match env_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Path from [`CONFIG_ENV_VAR`], ignoring an empty value.
pub fn env_config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
