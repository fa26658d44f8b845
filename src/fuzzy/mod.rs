// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word matching: typo tolerance via edit distance.
//!
//! Full Levenshtein over Unicode code points, after case folding. No early
//! exit or distance bound here: the similarity model needs the exact
//! distance, not just "within k".

mod levenshtein;

pub use levenshtein::edit_distance;
pub(crate) use levenshtein::{edit_distance_chars, fold_case};
