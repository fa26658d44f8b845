// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A tokenized corpus, ready to answer queries.
//!
//! Tokenizing and case-folding every phrase is the only per-corpus work, so
//! it happens once here. After that the corpus is read-only: queries never
//! mutate it, and nothing from one query leaks into the next.
//!
//! With the `parallel` feature, tokenization and scoring fan out over rayon.
//! Both use indexed parallel iterators, and `collect` keeps corpus order, so
//! the output is identical to the sequential build.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::RankConfig;
use crate::scoring::phrase_score;
use crate::scoring::ranking::select_top;
use crate::types::{Candidate, Phrase, RankedResult, Ranking};
use crate::Error;

/// Candidates with their phrases tokenized, in corpus order.
#[derive(Debug, Clone)]
pub struct PhraseCorpus<Id> {
    ids: Vec<Id>,
    phrases: Vec<Phrase>,
}

impl<Id> PhraseCorpus<Id> {
    /// Tokenize every candidate. Missing text becomes an empty phrase.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Candidate<Id>>,
    {
        let (ids, texts): (Vec<Id>, Vec<Option<String>>) = candidates
            .into_iter()
            .map(|c| {
                let c = c.into();
                (c.id, c.text)
            })
            .unzip();

        let phrases = tokenize_all(&texts);
        Self { ids, phrases }
    }

    /// Build from phrases the caller already tokenized.
    pub fn from_phrases<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Id, Phrase)>,
    {
        let (ids, phrases) = entries.into_iter().unzip();
        Self { ids, phrases }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &Phrase)> + '_ {
        self.ids.iter().zip(self.phrases.iter())
    }

    /// Score every phrase against `query`, in corpus order.
    pub fn score(&self, query: &Phrase, rate: f64) -> Vec<f64> {
        score_all(&self.phrases, query, rate)
    }

    /// Rank this corpus for `query`, keeping the corpus for later queries.
    pub fn rank(&self, query: &str, config: &RankConfig) -> Result<Ranking<Id>, Error>
    where
        Id: Clone,
    {
        config.validate()?;
        let scores = self.score(&Phrase::from_text(query), config.decay_rate);
        let scored = self
            .ids
            .iter()
            .cloned()
            .zip(scores)
            .map(|(id, score)| RankedResult { id, score })
            .collect();
        Ok(select_top(scored, config))
    }

    /// Rank and consume the corpus; no `Clone` needed on ids.
    pub fn into_ranking(self, query: &str, config: &RankConfig) -> Result<Ranking<Id>, Error> {
        config.validate()?;
        let scores = self.score(&Phrase::from_text(query), config.decay_rate);
        let scored = self
            .ids
            .into_iter()
            .zip(scores)
            .map(|(id, score)| RankedResult { id, score })
            .collect();
        Ok(select_top(scored, config))
    }
}

#[cfg(feature = "parallel")]
fn tokenize_all(texts: &[Option<String>]) -> Vec<Phrase> {
    texts
        .par_iter()
        .map(|t| Phrase::from_optional_text(t.as_deref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn tokenize_all(texts: &[Option<String>]) -> Vec<Phrase> {
    texts
        .iter()
        .map(|t| Phrase::from_optional_text(t.as_deref()))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_all(phrases: &[Phrase], query: &Phrase, rate: f64) -> Vec<f64> {
    phrases
        .par_iter()
        .map(|p| phrase_score(query, p, rate))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(phrases: &[Phrase], query: &Phrase, rate: f64) -> Vec<f64> {
    phrases.iter().map(|p| phrase_score(query, p, rate)).collect()
}
