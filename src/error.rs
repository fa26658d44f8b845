// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One error type for the whole crate.
//!
//! Scoring itself never fails: empty queries, empty corpora and missing phrase
//! text all have defined results. The only errors are bad configuration
//! (caught before any scoring starts) and I/O around the corpus/config files.

use std::path::PathBuf;

/// Errors returned by phrasefind.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Decay rate was zero, negative, NaN or infinite.
    #[error("invalid decay rate {0}: must be a finite number > 0")]
    InvalidDecayRate(f64),

    /// `max_results` was zero.
    #[error("invalid max_results {0}: must be at least 1")]
    InvalidMaxResults(usize),

    /// Score cutoff was negative, NaN or infinite.
    #[error("invalid score cutoff {0}: must be a finite number >= 0")]
    InvalidScoreCutoff(f64),

    /// A corpus or config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus or config file was not valid JSON for its schema.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True for errors caused by a bad `RankConfig` value.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::InvalidDecayRate(_) | Error::InvalidMaxResults(_) | Error::InvalidScoreCutoff(_)
        )
    }
}
