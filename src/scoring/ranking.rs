// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: cutoff, sort, truncate.
//!
//! Sort order is score descending. Equal scores keep corpus iteration order:
//! the sort is stable and the comparator reports `Equal` for equal scores,
//! so the first candidate the caller supplied comes first. That makes the
//! output a pure function of (query, corpus order, config), independent of
//! thread count or sort implementation.
//!
//! The cutoff is applied before truncation, so when more than `max_results`
//! candidates clear it, the highest-scoring ones are kept.

use std::cmp::Ordering;

use crate::config::RankConfig;
use crate::contracts::check_ranking_well_formed;
use crate::corpus::PhraseCorpus;
use crate::types::{Candidate, RankedResult, Ranking};
use crate::Error;

/// Compare two results for ranking: higher score first.
///
/// Returns `Equal` for equal scores so a stable sort keeps input order. Scores
/// are never NaN for a validated config; if one slipped through it compares
/// equal rather than panicking.
pub fn compare_ranked<Id>(a: &RankedResult<Id>, b: &RankedResult<Id>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Keep results at or above the cutoff, best first, at most `max_results`.
///
/// `scored` must be in corpus order for the tie-break to mean anything.
pub fn select_top<Id>(scored: Vec<RankedResult<Id>>, config: &RankConfig) -> Ranking<Id> {
    let mut kept: Vec<RankedResult<Id>> = scored
        .into_iter()
        .filter(|r| r.score >= config.score_cutoff)
        .collect();
    let total_matches = kept.len();

    // Stable: ties stay in corpus order
    kept.sort_by(compare_ranked);
    kept.truncate(config.max_results);

    check_ranking_well_formed(&kept, config.max_results, config.score_cutoff);
    Ranking {
        results: kept,
        total_matches,
    }
}

/// Rank candidate phrases against a query.
///
/// Tokenizes the query once, scores every candidate, and returns the best
/// `config.max_results` with score >= `config.score_cutoff`, highest first.
/// An empty query or empty corpus returns an empty vector. Only an invalid
/// config is an error, and it is reported before any scoring happens.
///
/// ```
/// use phrasefind::{rank, RankConfig};
///
/// let corpus = vec![(1, "hello word"), (2, "goodbye moon")];
/// let config = RankConfig::default().with_decay_rate(1.0);
/// let results = rank("hello world", corpus, &config).unwrap();
/// assert_eq!(results[0].id, 1);
/// ```
pub fn rank<Id, I>(query: &str, candidates: I, config: &RankConfig) -> Result<Vec<RankedResult<Id>>, Error>
where
    I: IntoIterator,
    I::Item: Into<Candidate<Id>>,
{
    rank_with_stats(query, candidates, config).map(Ranking::into_results)
}

/// Same as [`rank`], plus the number of candidates that met the cutoff.
pub fn rank_with_stats<Id, I>(query: &str, candidates: I, config: &RankConfig) -> Result<Ranking<Id>, Error>
where
    I: IntoIterator,
    I::Item: Into<Candidate<Id>>,
{
    config.validate()?;
    PhraseCorpus::from_candidates(candidates).into_ranking(query, config)
}
