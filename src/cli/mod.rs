// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the phrasefind command-line interface.
//!
//! Two subcommands: `search` ranks a JSON corpus against a query, and `score`
//! explains how one phrase scores against a query, word by word. Ranking
//! knobs come from a JSON config file (`--config` or `PHRASEFIND_CONFIG`),
//! and individual flags override the file.

pub mod display;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use phrasefind::config::env_config_path;
use phrasefind::{Error, RankConfig};

#[derive(Parser)]
#[command(
    name = "phrasefind",
    about = "Typo-tolerant phrase search over a JSON corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Ranking knobs shared by both subcommands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// JSON config file (overrides PHRASEFIND_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Word similarity decay rate (higher = stricter about typos)
    #[arg(long)]
    pub decay_rate: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank corpus phrases against a query
    Search {
        /// Path to a JSON corpus file
        corpus: PathBuf,

        /// Search query (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Minimum phrase score
        #[arg(long)]
        cutoff: Option<f64>,

        #[command(flatten)]
        rank: RankArgs,

        /// Skip punctuation and one-letter-word clean-up of the query
        #[arg(long)]
        raw: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Print elapsed time and total match count
        #[arg(long)]
        stats: bool,

        /// Print diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Explain how a phrase scores against a query
    Score {
        /// Query text
        query: String,

        /// Candidate phrase text
        phrase: String,

        #[command(flatten)]
        rank: RankArgs,
    },
}

/// Merge defaults, config file and flags, then validate.
///
/// Precedence, lowest first: built-in defaults, `PHRASEFIND_CONFIG`,
/// `--config` (replaces the env file), individual flags.
pub fn resolve_config(
    rank: &RankArgs,
    limit: Option<usize>,
    cutoff: Option<f64>,
) -> Result<RankConfig, Error> {
    let file = rank.config.clone().or_else(env_config_path);
    let mut config = match file.as_deref() {
        Some(path) => load_unvalidated(path)?,
        None => RankConfig::default(),
    };

    if let Some(rate) = rank.decay_rate {
        config.decay_rate = rate;
    }
    if let Some(limit) = limit {
        config.max_results = limit;
    }
    if let Some(cutoff) = cutoff {
        config.score_cutoff = cutoff;
    }

    config.validate()?;
    Ok(config)
}

/// A config file may hold a value a flag is about to fix, so validation waits
/// until the merge is done.
fn load_unvalidated(path: &Path) -> Result<RankConfig, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
