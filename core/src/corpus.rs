//! Corpus store: the complete record set, loaded wholesale at startup.
//!
//! The corpus is read-only once built. Replacing it (after re-ingestion)
//! means loading a new corpus and rebuilding whatever was derived from the
//! old one; nothing here mutates in place.

use crate::error::CorpusError;
use crate::model::{Pokemon, display_number};
use crate::types::PokemonId;
use std::collections::HashMap;
use std::path::Path;

/// Minimum display-number width, matching the historical three-digit format.
const MIN_NUMBER_WIDTH: usize = 3;

/// The complete, immutable catalog.
///
/// Lookup by id is O(1); iteration follows the order of the data file.
pub struct Corpus {
    records: Vec<Pokemon>,
    by_id: HashMap<PokemonId, usize>,
    number_width: usize,
}

impl Corpus {
    /// Builds a corpus from records.
    ///
    /// Rejects duplicate ids and renormalizes every record's display number
    /// to the corpus-wide width, so `number` is always the zero-padded form
    /// of `id` regardless of what ingestion wrote.
    pub fn new(mut records: Vec<Pokemon>) -> Result<Self, CorpusError> {
        let max_id = records.iter().map(|r| u32::from(r.id)).max().unwrap_or(0);
        let number_width = MIN_NUMBER_WIDTH.max(max_id.to_string().len());

        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id, position).is_some() {
                return Err(CorpusError::DuplicateId(u32::from(record.id)));
            }
        }

        for record in &mut records {
            record.number = display_number(record.id, number_width);
        }

        Ok(Self {
            records,
            by_id,
            number_width,
        })
    }

    /// Reads the JSON data file and builds a corpus from it.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<Pokemon> = serde_json::from_str(&content)?;
        Self::new(records)
    }
}

/// Read operations.
impl Corpus {
    /// Looks up a record by id. Absence is a routine outcome, not an error.
    pub fn get(&self, id: PokemonId) -> Option<&Pokemon> {
        self.by_id.get(&id).map(|&position| &self.records[position])
    }

    /// All records in original corpus order.
    pub fn records(&self) -> &[Pokemon] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The uniform display-number width for this corpus.
    pub fn number_width(&self) -> usize {
        self.number_width
    }
}
