// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how phrases get their numbers.
//!
//! Word pairs get a similarity in (0, 1] from their length-normalized edit
//! distance. A phrase scores the sum, over query words, of each query word's
//! best match anywhere in the candidate. Ranking is cutoff, stable sort,
//! truncate.

mod similarity;
pub mod ranking;

pub use similarity::*;
