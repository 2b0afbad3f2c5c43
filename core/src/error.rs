use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("recent store error: {0}")]
    Recent(#[from] RecentStoreError),
}

/// Errors loading or building the corpus. Fatal to startup; the application
/// cannot run without a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate id: {0}")]
    DuplicateId(u32),
}

/// Errors from the recent-selection store. Write failures surface here;
/// read failures never do (a bad read degrades to an empty list).
#[derive(Error, Debug)]
pub enum RecentStoreError {
    #[error("database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),
}
