//! Query engine: the public search entry point.

use crate::config::{ConfigError, SearchConfig};
use crate::index::FuzzyIndex;
use crate::results::{Scored, SearchOutcome};
use pokesort_core::{Corpus, Pokemon};
use std::sync::Arc;

/// The search entry point.
///
/// Owns the corpus handle and the index built from it. Construction builds
/// the index once; [`search`](Self::search) is a pure function of the query
/// and is cheap enough to call on every settled keystroke. Replacing the
/// corpus means constructing a new engine.
pub struct SearchEngine {
    corpus: Arc<Corpus>,
    index: FuzzyIndex,
}

impl SearchEngine {
    /// Builds the engine and its index. Fails fast on an invalid config.
    pub fn new(corpus: Arc<Corpus>, config: SearchConfig) -> Result<Self, ConfigError> {
        let index = FuzzyIndex::build(&corpus, config)?;
        Ok(Self { corpus, index })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

/// Search operations.
impl SearchEngine {
    /// Searches the corpus.
    ///
    /// Empty or whitespace-only input is the no-filter sentinel: the full
    /// corpus in original order with no best match. Otherwise the input is
    /// trimmed, scored by the index, and projected down to records in
    /// ascending-score order; `best_match` is the first of those, if any.
    pub fn search(&self, raw: &str) -> SearchOutcome<'_> {
        let query = raw.trim();
        if query.is_empty() {
            return SearchOutcome {
                results: self.corpus.iter().collect(),
                best_match: None,
            };
        }

        let results: Vec<&Pokemon> = self
            .index
            .query(query)
            .into_iter()
            .map(|hit| &self.corpus.records()[hit.index])
            .collect();
        let best_match = results.first().copied();

        SearchOutcome {
            results,
            best_match,
        }
    }

    /// Like [`search`](Self::search), with scores kept for inspection.
    /// The no-filter sentinel yields an empty ranking.
    pub fn ranked(&self, raw: &str) -> Vec<Scored<'_>> {
        let query = raw.trim();
        if query.is_empty() {
            return Vec::new();
        }

        self.index
            .query(query)
            .into_iter()
            .map(|hit| Scored {
                record: &self.corpus.records()[hit.index],
                score: hit.score,
            })
            .collect()
    }
}
