use log::{debug, error, info};
use rusqlite::{params, Row};

use super::connection::VocabStore;
use super::error::{StoreError, StoreResult};
use crate::models::{normalize, Entry, InsertCommand};

impl VocabStore {
    /// Lowercase both inputs and append them as a new entry. Duplicates are
    /// allowed; every call produces a fresh row with a larger id. The hydrated
    /// entry is returned so the caller does not have to re-query.
    pub fn insert(&self, word: &str, translation: &str) -> StoreResult<Entry> {
        let word = normalize(word);
        let translation = normalize(translation);

        let result = self
            .conn
            .prepare_cached("INSERT INTO words (word, translation) VALUES (?1, ?2)")
            .map_err(StoreError::write("failed to prepare insert"))
            .and_then(|mut stmt| {
                stmt.execute(params![word, translation])
                    .map_err(StoreError::write("failed to insert word"))
            });

        if let Err(err) = result {
            error!(
                "event=word_insert module=db status=error error_code={} error={}",
                err.code(),
                err
            );
            return Err(err);
        }

        let id = self.conn.last_insert_rowid();
        info!("event=word_insert module=db status=ok id={id}");
        Ok(Entry {
            id,
            word,
            translation,
        })
    }

    /// Message-style entry point used by the terminal shell.
    pub fn execute(&self, command: InsertCommand) -> StoreResult<Entry> {
        self.insert(&command.word, &command.translation)
    }

    /// Every stored entry in ascending id order. An empty table yields an
    /// empty vector.
    pub fn list_all(&self) -> StoreResult<Vec<Entry>> {
        let entries = self.query_entries().map_err(|err| {
            error!(
                "event=word_list module=db status=error error_code={} error={}",
                err.code(),
                err
            );
            err
        })?;

        debug!("event=word_list module=db status=ok count={}", entries.len());
        Ok(entries)
    }

    /// Number of stored entries.
    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
            .map_err(StoreError::read("failed to count words"))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn query_entries(&self) -> StoreResult<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, word, translation FROM words ORDER BY id")
            .map_err(StoreError::read("failed to prepare word query"))?;

        let entries = stmt
            .query_map([], entry_from_row)
            .map_err(StoreError::read("failed to load words"))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::read("failed to collect words"))?;

        Ok(entries)
    }
}

/// Rows written by older builds may carry NULL text columns; they read back
/// as empty strings.
fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        word: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        translation: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
