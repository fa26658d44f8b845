// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring and ranking invariants.
//!
//! Debug-mode assertions, zero-cost in release builds (`debug_assert!`).
//! They catch a broken comparator or a bad similarity value at the place it
//! happens instead of three layers up in a test failure.
//!
//! | Contract                       | Invariant                                  |
//! |--------------------------------|--------------------------------------------|
//! | `check_similarity_bounds`      | word similarity in [0, 1], never NaN       |
//! | `check_ranking_well_formed`    | descending, above cutoff, at most K        |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)

use crate::config::{DEFAULT_DECAY_RATE, DEFAULT_MAX_RESULTS, DEFAULT_SCORE_CUTOFF};
use crate::types::RankedResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The documented defaults must pass `RankConfig::validate`.
const _: () = {
    // INVARIANT: default decay rate is positive
    assert!(DEFAULT_DECAY_RATE > 0.0);
    // INVARIANT: default config returns at least one result
    assert!(DEFAULT_MAX_RESULTS >= 1);
    // INVARIANT: default cutoff is non-negative
    assert!(DEFAULT_SCORE_CUTOFF >= 0.0);
};

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// Word similarity is a finite value in [0, 1].
///
/// The model's range is (0, 1]; 0 is allowed only because `exp` underflows
/// for absurd decay rates.
#[inline]
pub fn check_similarity_bounds(similarity: f64) {
    // INVARIANT: similarity_bounded
    debug_assert!(
        (0.0..=1.0).contains(&similarity),
        "Contract violation: similarity {} outside [0, 1]",
        similarity
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Ranked output is sorted, above the cutoff, and bounded.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is ascending, any score is below `cutoff`, or
/// there are more than `max_results` entries.
#[inline]
pub fn check_ranking_well_formed<Id>(results: &[RankedResult<Id>], max_results: usize, cutoff: f64) {
    // INVARIANT: bounded_cardinality
    debug_assert!(
        results.len() <= max_results,
        "Contract violation: {} results > max_results {}",
        results.len(),
        max_results
    );

    for (i, r) in results.iter().enumerate() {
        // INVARIANT: cutoff_enforced
        debug_assert!(
            r.score >= cutoff,
            "Contract violation: result {} score {} below cutoff {}",
            i,
            r.score,
            cutoff
        );
    }

    for (i, pair) in results.windows(2).enumerate() {
        // INVARIANT: descending_order
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: results not descending at {}: {} < {}",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}
