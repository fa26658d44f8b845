// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance over case-folded code points.
//!
//! Single-row dynamic programming: O(n·m) time, O(min(n, m)) memory. Words are
//! short, so the quadratic term is never the problem; the allocation per pair
//! is, which is why the scorer folds each token once and calls
//! [`edit_distance_chars`] on pre-built slices.

/// Lowercase a token and split it into code points.
///
/// Uses Unicode `to_lowercase`, so one input char can fold into more than one
/// (`'İ'` becomes `"i̇"`). Both sides of every comparison go through this, so
/// lengths stay consistent.
pub(crate) fn fold_case(token: &str) -> Vec<char> {
    token.to_lowercase().chars().collect()
}

/// Case-insensitive Levenshtein distance between two strings.
///
/// Counts insertions, deletions and substitutions of Unicode code points, so a
/// Cyrillic letter is one edit unit, not two bytes.
///
/// ```
/// use phrasefind::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("Hello", "hELLO"), 0);
/// assert_eq!(edit_distance("кіт", "кот"), 1);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    edit_distance_chars(&fold_case(a), &fold_case(b))
}

/// Levenshtein distance between two already-folded code point slices.
pub(crate) fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    if a == b {
        return 0;
    }

    // Keep the DP row as short as the shorter word
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut dp: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(lc != sc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[short.len()]
}
