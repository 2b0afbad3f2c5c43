//! Recent-selection tracker.
//!
//! A bounded, most-recent-first list of previously selected records,
//! persisted as a JSON string under a fixed key in redb. Writes commit
//! before returning, so a read immediately after a write observes it.
//! Reads are best-effort: absent, unreadable, or unparsable state degrades
//! to an empty list.

use crate::error::RecentStoreError;
use crate::model::Pokemon;
use crate::types::PokemonId;
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Recent table: &str → JSON string.
const RECENT_TABLE: TableDefinition<&str, &str> = TableDefinition::new("recent");

/// The single key the list is stored under.
const RECENT_KEY: &str = "recent_selections";

/// Maximum number of entries kept.
pub const RECENT_CAP: usize = 10;

/// Denormalized summary of a selected record: enough to render a recent row
/// without touching the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub id: PokemonId,
    pub number: String,
    pub name_en: String,
    pub name_de: String,
}

impl From<&Pokemon> for RecentEntry {
    fn from(record: &Pokemon) -> Self {
        Self {
            id: record.id,
            number: record.number.clone(),
            name_en: record.name_en.clone(),
            name_de: record.name_de.clone(),
        }
    }
}

/// Presentation order for the recent list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecentOrder {
    #[default]
    MostRecentFirst,
    ByNumber,
}

/// One row of a presentation view over the recent list.
#[derive(Debug, PartialEq)]
pub struct RecentView<'a> {
    pub entry: &'a RecentEntry,
    /// True for the most recently selected entry, in every ordering.
    pub is_latest: bool,
}

/// Durable store for the recent-selection list.
pub struct RecentStore {
    db: redb::Database,
}

impl RecentStore {
    /// Creates or opens the backing database and its table.
    pub fn open(path: &Path) -> Result<Self, RecentStoreError> {
        let db = redb::Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RECENT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

/// Read operations.
impl RecentStore {
    /// Reads the persisted list, most recent first.
    ///
    /// Never fails the caller: this store is a convenience, not a source of
    /// truth, so any read or parse failure yields an empty list.
    pub fn load(&self) -> Vec<RecentEntry> {
        self.read_json().unwrap_or_default()
    }

    fn read_json(&self) -> Option<Vec<RecentEntry>> {
        let read_txn = self.db.begin_read().ok()?;
        let table = read_txn.open_table(RECENT_TABLE).ok()?;
        let guard = table.get(RECENT_KEY).ok()??;
        serde_json::from_str(guard.value()).ok()
    }
}

/// Write operations.
impl RecentStore {
    /// Records a selection: any existing entry with the same id moves to the
    /// front, and the list is truncated to [`RECENT_CAP`]. Returns the
    /// updated list.
    pub fn select(&mut self, entry: RecentEntry) -> Result<Vec<RecentEntry>, RecentStoreError> {
        let mut entries = self.load();
        entries.retain(|e| e.id != entry.id);
        entries.insert(0, entry);
        entries.truncate(RECENT_CAP);

        self.write(&entries)?;
        Ok(entries)
    }

    /// Empties the list and persists the empty state.
    pub fn clear(&mut self) -> Result<(), RecentStoreError> {
        self.write(&[])
    }

    fn write(&mut self, entries: &[RecentEntry]) -> Result<(), RecentStoreError> {
        let json = serde_json::to_string(entries).expect("serialization failed");

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECENT_TABLE)?;
            table.insert(RECENT_KEY, json.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Presentation projection over a loaded list.
///
/// Never mutates the stored most-recent-first order; `ByNumber` only changes
/// the order rows are handed out, and the latest selection keeps its marker.
pub fn view(entries: &[RecentEntry], order: RecentOrder) -> Vec<RecentView<'_>> {
    let mut rows: Vec<RecentView<'_>> = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| RecentView {
            entry,
            is_latest: position == 0,
        })
        .collect();

    if order == RecentOrder::ByNumber {
        rows.sort_by(|a, b| a.entry.id.cmp(&b.entry.id));
    }

    rows
}
