// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant phrase search.
//!
//! Given a query and a corpus of short phrases, rank the phrases by how well
//! their words match the query's words, allowing for misspellings. Built for
//! quote lookup: users half-remember a line, type it with typos, and expect
//! the right quote on top.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────────┐   ┌──────────────────┐   ┌─────────────┐
//! │ tokenize.rs │──▶│ fuzzy/levenshtein│──▶│ scoring/similarity│──▶│scoring/     │
//! │ (tokenize,  │   │ (edit_distance)  │   │ (word_similarity, │   │ ranking.rs  │
//! │ clean_query)│   │                  │   │  phrase_score)    │   │ (rank)      │
//! └─────────────┘   └──────────────────┘   └──────────────────┘   └─────────────┘
//!        │                                          │                     │
//!        ▼                                          ▼                     ▼
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │ types.rs (Phrase, Candidate, RankedResult)   corpus.rs (PhraseCorpus)       │
//! │ config.rs (RankConfig)                       contracts.rs (debug checks)   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The scoring core is pure: no I/O, no printing, no state between calls.
//! [`source`] (JSON corpus files) and the `phrasefind` binary sit outside it.
//!
//! # Usage
//!
//! ```
//! use phrasefind::{rank, RankConfig};
//!
//! let corpus = vec![
//!     (1, "Шо мовчите, скуштували?"),
//!     (2, "Так би усє кишки і шваркнули"),
//! ];
//! let results = rank("кишки шваpкнули", corpus, &RankConfig::default()).unwrap();
//! assert_eq!(results[0].id, 2);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod corpus;
mod error;
pub mod fuzzy;
pub mod scoring;
pub mod source;
mod tokenize;
mod types;

// Re-exports for public API
pub use config::{RankConfig, DEFAULT_DECAY_RATE, DEFAULT_MAX_RESULTS, DEFAULT_SCORE_CUTOFF};
pub use corpus::PhraseCorpus;
pub use error::Error;
pub use fuzzy::edit_distance;
pub use scoring::ranking::{compare_ranked, rank, rank_with_stats, select_top};
pub use scoring::{explain_score, phrase_score, word_similarity, TokenMatch};
pub use tokenize::{clean_query, tokenize};
pub use types::{Candidate, Phrase, RankedResult, Ranking};
