// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting phrases into word tokens.
//!
//! Tokens are whitespace-delimited words, trimmed, never empty. Casing is left
//! alone here: folding happens once per token when a [`Phrase`](crate::Phrase)
//! is built, so the original spelling survives for display.

/// Split text into trimmed, non-empty word tokens.
///
/// Splits on Unicode whitespace. Empty or all-whitespace input gives an empty
/// vector.
///
/// ```
/// use phrasefind::tokenize;
///
/// assert_eq!(tokenize("  hello   world "), vec!["hello", "world"]);
/// assert!(tokenize(" \t\n").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clean up a raw user query before ranking.
///
/// Removes ASCII punctuation and drops words that are a single character
/// long. What remains is joined by single spaces. Users paste quotes with
/// commas and question marks; stray one-letter words ("a", "в") match almost
/// anything and only add noise to the sum.
///
/// This is an explicit step for front-ends. [`rank`](crate::rank) never calls it.
///
/// ```
/// use phrasefind::clean_query;
///
/// assert_eq!(clean_query("Шо мовчите, скуштували?"), "Шо мовчите скуштували");
/// assert_eq!(clean_query("a cat, a hat"), "cat hat");
/// ```
pub fn clean_query(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();

    stripped
        .split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .collect::<Vec<_>>()
        .join(" ")
}
