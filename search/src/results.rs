//! Search result projections.

use pokesort_core::Pokemon;

/// Outcome of one search: records in relevance order plus the single best
/// match used for jump-to behavior.
///
/// An empty `results` with no best match is the valid "no match" outcome,
/// not an error.
#[derive(Debug)]
pub struct SearchOutcome<'a> {
    /// Records in ascending-score order, or the whole corpus in original
    /// order for the no-filter sentinel.
    pub results: Vec<&'a Pokemon>,
    /// The lowest-score record; `None` when `results` is empty or the query
    /// was the no-filter sentinel.
    pub best_match: Option<&'a Pokemon>,
}

/// A record with its score, for callers that want the ranking itself.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub record: &'a Pokemon,
    /// Combined score in [0, 1]; lower is better.
    pub score: f64,
}
