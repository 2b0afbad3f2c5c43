//! Fuzzy search over the pokesort corpus.
//!
//! # Design
//!
//! - [`FuzzyIndex`] is built once from the full corpus and a field/weight
//!   config, then queried read-only. Replacing the corpus means rebuilding
//!   the index; there is no incremental update.
//! - [`SearchEngine`] is the public entry point: it owns the corpus handle
//!   and the index, treats empty input as the no-filter sentinel, and turns
//!   scored hits into ordered records plus a single best match.
//! - [`QueryCoalescer`] decouples the value the user is typing from the
//!   value driving a search, so a burst of keystrokes costs at most one
//!   corpus scan per settled value.

mod coalesce;
mod config;
mod engine;
mod index;
mod results;

pub use coalesce::QueryCoalescer;
pub use config::{ConfigError, DEFAULT_THRESHOLD, SearchConfig, SearchField};
pub use engine::SearchEngine;
pub use index::{FuzzyIndex, Hit};
pub use results::{Scored, SearchOutcome};
