// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and word similarity.
//!
//! Arbitrary bytes become arbitrary Unicode words. Distance must stay
//! symmetric and bounded by length in characters, and similarity must stay
//! in (0, 1] whatever the input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phrasefind::{edit_distance, word_similarity};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    /// Decay rate numerator, mapped into (0, 10]
    rate: u8,
}

/// Lossy UTF-8, capped at `max` characters to avoid timeouts
fn word(bytes: &[u8], max: usize) -> String {
    String::from_utf8_lossy(bytes).chars().take(max).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = word(&input.a, 64);
    let b = word(&input.b, 64);
    let rate = (f64::from(input.rate) + 1.0) / 25.6;

    let ab = edit_distance(&a, &b);

    // INVARIANT 1: Symmetric
    assert_eq!(ab, edit_distance(&b, &a), "asymmetric for a={:?}, b={:?}", a, b);

    // INVARIANT 2: Identity
    assert_eq!(edit_distance(&a, &a), 0, "self distance nonzero for a={:?}", a);

    // INVARIANT 3: Bounded by the longer folded word
    let la = a.to_lowercase().chars().count();
    let lb = b.to_lowercase().chars().count();
    assert!(ab <= la.max(lb), "distance {} exceeds lengths for a={:?}, b={:?}", ab, a, b);
    assert!(ab >= la.abs_diff(lb), "distance {} below length gap for a={:?}, b={:?}", ab, a, b);

    // INVARIANT 4: Similarity in (0, 1], 1 exactly at distance 0
    let s = word_similarity(&a, &b, rate);
    assert!(s > 0.0 && s <= 1.0, "similarity {} out of range", s);
    assert_eq!(s == 1.0, ab == 0, "similarity {} at distance {}", s, ab);
});
