// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind phrase similarity.
//!
//! # Word similarity
//!
//! ```text
//! scale      = max(len(w1), len(w2))          code points, after folding
//! similarity = exp(-rate * distance / scale)
//! ```
//!
//! Dividing by the longer word's length makes one typo in "ностальгія" cost
//! less than one typo in "кіт". The exponential keeps every value in (0, 1],
//! hits 1 only at distance 0, and decays smoothly instead of falling off a
//! threshold. Two empty words are defined as identical (similarity 1).
//!
//! # Phrase score
//!
//! ```text
//! score(Q, C) = Σ_{q ∈ Q} max_{c ∈ C} similarity(q, c)      (0 if C is empty)
//! ```
//!
//! Asymmetric on purpose. Every query word looks for its best partner, the
//! same candidate word may serve several query words, repeated query words
//! count once each, and extra candidate words cost nothing. Longer phrases
//! get more chances to match, which favors recall on short quotes.

use crate::contracts::check_similarity_bounds;
use crate::fuzzy::{edit_distance_chars, fold_case};
use crate::types::Phrase;

/// Similarity of two words in (0, 1].
///
/// `rate` is the decay constant; larger values punish edits harder. Callers
/// going through [`rank`](crate::rank) get it validated as finite and
/// positive; direct callers are trusted.
///
/// ```
/// use phrasefind::word_similarity;
///
/// assert_eq!(word_similarity("Hello", "hello", 1.0), 1.0);
/// let typo = word_similarity("world", "word", 1.0);
/// assert!((typo - (-0.2f64).exp()).abs() < 1e-12);
/// ```
pub fn word_similarity(w1: &str, w2: &str, rate: f64) -> f64 {
    similarity_chars(&fold_case(w1), &fold_case(w2), rate).1
}

/// Edit distance and similarity of two folded words.
fn similarity_chars(a: &[char], b: &[char], rate: f64) -> (usize, f64) {
    let scale = a.len().max(b.len());
    if scale == 0 {
        // Both empty: identical by definition
        return (0, 1.0);
    }

    let distance = edit_distance_chars(a, b);
    let similarity = (-rate * distance as f64 / scale as f64).exp();
    check_similarity_bounds(similarity);
    (distance, similarity)
}

/// Best partner for one query word: (candidate index, distance, similarity).
///
/// First occurrence wins on ties. Stops early on an exact match since nothing
/// can beat 1.0.
fn best_match(query_word: &[char], candidate: &[Vec<char>], rate: f64) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;
    for (idx, word) in candidate.iter().enumerate() {
        let (distance, similarity) = similarity_chars(query_word, word, rate);
        if best.map_or(true, |(_, _, s)| similarity > s) {
            best = Some((idx, distance, similarity));
            if distance == 0 {
                break;
            }
        }
    }
    best
}

/// Score a candidate phrase against a query phrase.
///
/// Empty query or empty candidate scores 0.
///
/// ```
/// use phrasefind::{phrase_score, Phrase};
///
/// let q = Phrase::from_text("abc");
/// assert_eq!(phrase_score(&q, &Phrase::from_text("ABC"), 2.0), 1.0);
/// assert_eq!(phrase_score(&q, &Phrase::default(), 2.0), 0.0);
/// ```
pub fn phrase_score(query: &Phrase, candidate: &Phrase, rate: f64) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }

    query
        .folded()
        .iter()
        .map(|q| best_match(q, candidate.folded(), rate).map_or(0.0, |(_, _, s)| s))
        .fold(0.0, |total, s| total + s)
}

/// How one query word contributed to a phrase score.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch {
    /// The query word, original spelling.
    pub query_token: String,
    /// Best-matching candidate word, `None` when the candidate is empty.
    pub matched_token: Option<String>,
    /// Edit distance to `matched_token` after case folding.
    pub distance: Option<usize>,
    /// This word's term in the sum.
    pub similarity: f64,
}

/// Per-query-word breakdown of [`phrase_score`].
///
/// One entry per query token, in query order. Summing `similarity` in order
/// gives exactly the value `phrase_score` returns.
pub fn explain_score(query: &Phrase, candidate: &Phrase, rate: f64) -> Vec<TokenMatch> {
    query
        .tokens()
        .iter()
        .zip(query.folded())
        .map(|(token, folded)| {
            let best = if candidate.is_empty() {
                None
            } else {
                best_match(folded, candidate.folded(), rate)
            };
            match best {
                Some((idx, distance, similarity)) => TokenMatch {
                    query_token: token.clone(),
                    matched_token: Some(candidate.tokens()[idx].clone()),
                    distance: Some(distance),
                    similarity,
                },
                None => TokenMatch {
                    query_token: token.clone(),
                    matched_token: None,
                    distance: None,
                    similarity: 0.0,
                },
            }
        })
        .collect()
}
