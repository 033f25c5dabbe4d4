use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::Connection;

use super::error::{StoreError, StoreResult};

/// Create-if-absent statement for the only table the application owns.
/// `AUTOINCREMENT` keeps ids from being reused even if rows ever disappear.
const CREATE_WORDS_TABLE: &str = "CREATE TABLE IF NOT EXISTS words (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    word TEXT,
    translation TEXT
)";

/// Owner of the SQLite connection. Built once at startup and handed to every
/// caller that needs persistence; dropping it closes the database.
pub struct VocabStore {
    pub(super) conn: Connection,
}

impl VocabStore {
    /// Open (or create) the database file at `path` and make sure the schema
    /// exists. Any failure here is reported as `StorageUnavailable`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!(
            "event=db_open module=db status=start mode=file path={}",
            path.display()
        );

        let store = Connection::open(path)
            .map_err(StoreError::unavailable("failed to open SQLite database"))
            .map(|conn| Self { conn })
            .and_then(|store| store.initialize().map(|()| store));

        log_open_outcome(&store, "file", started_at);
        store
    }

    /// Same as [`VocabStore::open`] but backed by a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=db_open module=db status=start mode=memory");

        let store = Connection::open_in_memory()
            .map_err(StoreError::unavailable("failed to open in-memory database"))
            .map(|conn| Self { conn })
            .and_then(|store| store.initialize().map(|()| store));

        log_open_outcome(&store, "memory", started_at);
        store
    }

    /// Ensure the `words` table exists. Safe to call any number of times.
    pub fn initialize(&self) -> StoreResult<()> {
        self.conn
            .execute(CREATE_WORDS_TABLE, [])
            .map_err(StoreError::unavailable("failed to create words table"))?;
        Ok(())
    }
}

fn log_open_outcome(store: &StoreResult<VocabStore>, mode: &str, started_at: Instant) {
    match store {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error_code={} error={}",
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
}
