// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking output.
//!
//! Whatever the query, corpus and config, a successful ranking has at most
//! `max_results` entries, all at or above the cutoff, in descending score
//! order with ties in corpus order. Invalid configs must error, not panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phrasefind::{rank_with_stats, RankConfig};

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    corpus: Vec<Option<String>>,
    decay_rate: f64,
    max_results: u8,
    score_cutoff: f64,
}

fuzz_target!(|input: RankInput| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(100).collect();
    let corpus: Vec<(usize, Option<String>)> = input
        .corpus
        .into_iter()
        .take(64)
        .map(|text| text.map(|t| t.chars().take(100).collect()))
        .enumerate()
        .collect();
    let corpus_len = corpus.len();

    let config = RankConfig {
        decay_rate: input.decay_rate,
        max_results: usize::from(input.max_results),
        score_cutoff: input.score_cutoff,
    };
    let valid = config.validate().is_ok();

    let ranking = match rank_with_stats(&query, corpus, &config) {
        Ok(ranking) => ranking,
        Err(e) => {
            // INVARIANT 1: Only invalid configs fail
            assert!(!valid, "valid config {:?} failed: {}", config, e);
            assert!(e.is_config(), "unexpected error kind: {}", e);
            return;
        }
    };
    assert!(valid, "invalid config {:?} was accepted", config);

    let results = &ranking.results;

    // INVARIANT 2: Bounded cardinality
    assert!(results.len() <= config.max_results);
    assert!(ranking.total_matches <= corpus_len);
    assert_eq!(results.len(), ranking.total_matches.min(config.max_results));

    for pair in results.windows(2) {
        // INVARIANT 3: Descending, ties in corpus order
        assert!(pair[0].score >= pair[1].score, "not descending: {:?}", pair);
        if pair[0].score == pair[1].score {
            assert!(pair[0].id < pair[1].id, "tie out of order: {:?}", pair);
        }
    }

    // INVARIANT 4: Cutoff enforced
    for r in results {
        assert!(r.score >= config.score_cutoff, "{:?} below cutoff {}", r, config.score_cutoff);
    }
});
