//! Shared test utilities and fixtures.

#![allow(dead_code)]

use phrasefind::{Candidate, RankConfig, RankedResult};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small corpus of film quotes, one of them with no text.
pub fn quotes() -> Vec<Candidate<u64>> {
    vec![
        Candidate::new(1, "Шо мовчите, скуштували?"),
        Candidate::new(2, "Так би усє кишки і шваркнули"),
        Candidate::missing(3),
        Candidate::new(4, "чого вам не хвата тюрми"),
        Candidate::new(5, "Йобане село!"),
        Candidate::new(6, "Я етого не люблю"),
    ]
}

/// Config with a zero cutoff: every candidate clears it, even empty ones.
pub fn permissive(max_results: usize) -> RankConfig {
    RankConfig::default()
        .with_max_results(max_results)
        .with_score_cutoff(0.0)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Ids of a result list, in order.
pub fn ids<Id: Clone>(results: &[RankedResult<Id>]) -> Vec<Id> {
    results.iter().map(|r| r.id.clone()).collect()
}

/// Check the output contract of a ranking call.
pub fn assert_ranking_contract<Id: std::fmt::Debug>(
    results: &[RankedResult<Id>],
    config: &RankConfig,
) {
    assert!(
        results.len() <= config.max_results,
        "got {} results, max_results is {}",
        results.len(),
        config.max_results
    );
    for r in results {
        assert!(
            r.score >= config.score_cutoff,
            "{:?} scored {} below cutoff {}",
            r.id,
            r.score,
            config.score_cutoff
        );
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results not descending: {:?} ({}) before {:?} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}
