// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON corpus files.
//!
//! The engine only needs `(id, phrase)` pairs. This module reads them from a
//! JSON array and carries the display fields (title, speaker, url) along for
//! whoever prints the results:
//!
//! ```json
//! [
//!   {"id": 1, "phrase": "Йобане село!", "title": "Дєтство", "speaker": "Батько"},
//!   {"id": 2, "tokens": "чого вам не хвата тюрми", "url": "https://example.org/2"},
//!   {"id": 3, "phrase": null}
//! ]
//! ```
//!
//! `tokens` is accepted as another name for `phrase`. A `null` or missing
//! phrase is kept as a record with no text: it scores 0 and never fails the load.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Candidate;
use crate::Error;

/// One corpus entry plus its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub id: u64,
    #[serde(default, alias = "tokens")]
    pub phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CorpusRecord {
    /// The `(id, phrase)` pair the ranker scores.
    pub fn candidate(&self) -> Candidate<u64> {
        Candidate {
            id: self.id,
            text: self.phrase.clone(),
        }
    }
}

/// Parse a JSON corpus. `origin` only labels errors.
pub fn parse_corpus(json: &str, origin: &Path) -> Result<Vec<CorpusRecord>, Error> {
    serde_json::from_str(json).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON corpus file.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusRecord>, Error> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_corpus(&content, path)
}

/// Index records by id for result lookup.
///
/// Later duplicates win, matching what a keyed table would hold.
pub fn index_by_id(records: &[CorpusRecord]) -> HashMap<u64, &CorpusRecord> {
    records.iter().map(|r| (r.id, r)).collect()
}
