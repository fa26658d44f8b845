// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: phrases, candidates, ranked results.
//!
//! Everything here is built fresh per query and thrown away afterwards. The
//! one exception is a [`Phrase`] held inside a [`PhraseCorpus`](crate::PhraseCorpus),
//! which is immutable once built.

use serde::Serialize;

use crate::fuzzy::fold_case;
use crate::tokenize::tokenize;

/// An ordered sequence of word tokens: the query or one candidate's text.
///
/// Two constructors, two input shapes. [`Phrase::from_text`] tokenizes raw
/// text; [`Phrase::from_tokens`] takes tokens that were already split and
/// only trims them. Neither guesses which one it was given.
///
/// Each token's case-folded code points are computed once here so the scorer
/// can compare `char` slices without re-folding on every pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase {
    tokens: Vec<String>,
    folded: Vec<Vec<char>>,
}

impl Phrase {
    /// Tokenize raw text into a phrase.
    pub fn from_text(text: &str) -> Self {
        Self::from_clean_tokens(tokenize(text))
    }

    /// Missing text is an empty phrase, not an error.
    pub fn from_optional_text(text: Option<&str>) -> Self {
        text.map(Self::from_text).unwrap_or_default()
    }

    /// Build from an existing token sequence without re-splitting.
    ///
    /// Tokens are trimmed and empty ones dropped, so the token invariant
    /// holds, but a token containing inner whitespace is kept as one token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .filter_map(|t| {
                let t = t.as_ref().trim();
                (!t.is_empty()).then(|| t.to_string())
            })
            .collect();
        Self::from_clean_tokens(tokens)
    }

    fn from_clean_tokens(tokens: Vec<String>) -> Self {
        let folded = tokens.iter().map(|t| fold_case(t)).collect();
        Self { tokens, folded }
    }

    /// Tokens in original order and spelling.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Case-folded code points, parallel to [`tokens`](Self::tokens).
    pub(crate) fn folded(&self) -> &[Vec<char>] {
        &self.folded
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// One corpus entry to score: a caller-owned id plus its phrase text.
///
/// The engine never creates or changes ids. `text` is optional because real
/// corpora have holes; a `None` scores 0 instead of failing the whole query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<Id> {
    pub id: Id,
    pub text: Option<String>,
}

impl<Id> Candidate<Id> {
    pub fn new(id: Id, text: impl Into<String>) -> Self {
        Self {
            id,
            text: Some(text.into()),
        }
    }

    /// A candidate with no phrase text.
    pub fn missing(id: Id) -> Self {
        Self { id, text: None }
    }

    /// Tokenize this candidate's text.
    pub fn phrase(&self) -> Phrase {
        Phrase::from_optional_text(self.text.as_deref())
    }
}

impl<Id> From<(Id, &str)> for Candidate<Id> {
    fn from((id, text): (Id, &str)) -> Self {
        Self::new(id, text)
    }
}

impl<Id> From<(Id, String)> for Candidate<Id> {
    fn from((id, text): (Id, String)) -> Self {
        Self {
            id,
            text: Some(text),
        }
    }
}

impl<Id> From<(Id, Option<String>)> for Candidate<Id> {
    fn from((id, text): (Id, Option<String>)) -> Self {
        Self { id, text }
    }
}

impl<Id> From<(Id, Option<&str>)> for Candidate<Id> {
    fn from((id, text): (Id, Option<&str>)) -> Self {
        Self {
            id,
            text: text.map(str::to_string),
        }
    }
}

/// A scored candidate id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<Id> {
    pub id: Id,
    /// Sum of per-query-token best similarities. Not normalized: the upper
    /// bound is the number of query tokens.
    pub score: f64,
}

/// Output of a ranking pass.
///
/// `results` is sorted by score descending, every score is at least the
/// cutoff, and there are at most `max_results` entries. `total_matches`
/// counts everything that met the cutoff before truncation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<Id> {
    pub results: Vec<RankedResult<Id>>,
    pub total_matches: usize,
}

impl<Id> Ranking<Id> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<RankedResult<Id>> {
        self.results
    }
}
