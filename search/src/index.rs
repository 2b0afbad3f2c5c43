//! The fuzzy index: approximate multi-field matching over the corpus.
//!
//! Built once from the full record set, queried read-only on every settled
//! keystroke, rebuilt wholesale when the corpus changes.
//!
//! Name fields are matched approximately: the query is compared against
//! every window of the field whose length is within the edit budget, and
//! the best Damerau-Levenshtein distance, normalized by query length, is the
//! field's score. Interior substrings therefore score 0 just like full-field
//! matches, and a one-character typo in a reasonably long query stays well
//! under the default threshold. The number field is matched by exact
//! substring only.

use crate::config::{ConfigError, SearchConfig, SearchField};
use pokesort_core::{Corpus, Pokemon};

/// How a field's text is compared against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    /// Windowed Damerau-Levenshtein within the edit budget.
    Fuzzy,
    /// Exact substring containment; matches score 0.
    Substring,
}

impl SearchField {
    fn match_kind(self) -> MatchKind {
        match self {
            SearchField::NameEn | SearchField::NameDe => MatchKind::Fuzzy,
            SearchField::Number => MatchKind::Substring,
        }
    }
}

/// A record's pre-lowercased field text plus its configured weight.
#[derive(Debug)]
struct FieldText {
    chars: Vec<char>,
    weight: f64,
    kind: MatchKind,
}

/// Per-record entry: one [`FieldText`] per configured field, in config order.
#[derive(Debug)]
struct Entry {
    fields: Vec<FieldText>,
}

/// A scored hit. Lower is better; 0 is a perfect field match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Position of the record in the corpus.
    pub index: usize,
    /// Combined score in [0, 1].
    pub score: f64,
}

/// Immutable fuzzy index over the corpus.
#[derive(Debug)]
pub struct FuzzyIndex {
    entries: Vec<Entry>,
    threshold: f64,
}

impl FuzzyIndex {
    /// Builds the index, pre-lowercasing every configured field.
    ///
    /// Fails fast on an invalid config; no partial index is ever produced.
    /// Identical records and config always produce an index that answers
    /// identical queries identically.
    pub fn build(corpus: &Corpus, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let entries = corpus
            .iter()
            .map(|record| Entry {
                fields: config
                    .fields
                    .iter()
                    .map(|&(field, weight)| FieldText {
                        chars: lowercase(field_value(record, field)),
                        weight,
                        kind: field.match_kind(),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            entries,
            threshold: config.threshold,
        })
    }

    /// Scores every record against `query` and returns the matching hits
    /// sorted ascending by score. Ties keep corpus order (stable sort over
    /// an already corpus-ordered list).
    ///
    /// `query` must be non-empty; the engine treats empty input as the
    /// no-filter sentinel before it ever reaches the index.
    pub fn query(&self, query: &str) -> Vec<Hit> {
        let needle = lowercase(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<Hit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                self.score_entry(entry, &needle)
                    .map(|score| Hit { index, score })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    /// Best weighted field score for one record, or `None` if no field is
    /// within the threshold.
    ///
    /// The combination is a minimum, not a sum: a perfect hit on one
    /// high-weight field always beats mediocre hits everywhere else.
    fn score_entry(&self, entry: &Entry, needle: &[char]) -> Option<f64> {
        let mut best: Option<f64> = None;

        for field in &entry.fields {
            let raw = match field.kind {
                MatchKind::Fuzzy => fuzzy_score(&field.chars, needle, self.threshold),
                MatchKind::Substring => substring_score(&field.chars, needle),
            };
            let Some(raw) = raw else {
                continue;
            };

            let weighted = (raw / field.weight).min(1.0);
            best = Some(match best {
                Some(current) => current.min(weighted),
                None => weighted,
            });
        }

        best
    }
}

fn field_value(record: &Pokemon, field: SearchField) -> &str {
    match field {
        SearchField::NameEn => &record.name_en,
        SearchField::NameDe => &record.name_de,
        SearchField::Number => &record.number,
    }
}

fn lowercase(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Largest edit distance that can still score within the threshold.
fn max_edits(query_len: usize, threshold: f64) -> usize {
    (query_len as f64 * threshold).floor() as usize
}

/// Approximate substring score for one field, in [0, 1] with 0 = perfect.
///
/// Compares the query against every window of the haystack whose length is
/// within the edit budget and keeps the best Damerau-Levenshtein distance,
/// normalized by query length. Returns `None` when even the best window is
/// over the threshold.
fn fuzzy_score(haystack: &[char], needle: &[char], threshold: f64) -> Option<f64> {
    if haystack.is_empty() {
        return None;
    }

    let budget = max_edits(needle.len(), threshold);
    let lo = needle.len().saturating_sub(budget).max(1);
    let hi = (needle.len() + budget).min(haystack.len());

    let mut best = usize::MAX;
    if hi < lo {
        // Haystack shorter than the smallest window: compare it whole.
        best = strsim::generic_damerau_levenshtein(needle, haystack);
    } else {
        'lengths: for len in lo..=hi {
            for start in 0..=(haystack.len() - len) {
                let window = &haystack[start..start + len];
                let dist = strsim::generic_damerau_levenshtein(needle, window);
                if dist < best {
                    best = dist;
                    if best == 0 {
                        break 'lengths;
                    }
                }
            }
        }
    }

    if best > budget {
        return None;
    }
    let score = best as f64 / needle.len() as f64;
    (score <= threshold).then_some(score)
}

/// Exact substring containment, scored 0. Used for the number field.
fn substring_score(haystack: &[char], needle: &[char]) -> Option<f64> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
        .then_some(0.0)
}

#[cfg(test)]
mod tests;
