//! Persistence for mood entries.
//!
//! The aggregation core never touches storage directly; it receives read
//! snapshots through the [`EntryStore`] trait, the injected-dependency seam
//! standing in for the browser's local key-value storage of the original
//! design. The concrete implementation here is a single-table SQLite
//! key-value store: ids map to JSON records in the canonical stored format.

use crate::entry::{MoodEntry, StoredEntry};
use crate::errors::{AppResult, StorageError};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::{debug, info};

/// The storage contract consumed by the operations layer.
///
/// Implementations own the persisted entry collection exclusively; the core
/// only ever reads snapshots produced by `get_all`.
pub trait EntryStore {
    /// Returns every stored entry, ordered by entry date ascending.
    fn get_all(&self) -> AppResult<Vec<MoodEntry>>;

    /// Inserts or replaces the record for the entry's id.
    fn put(&self, entry: &MoodEntry) -> AppResult<()>;

    /// Deletes the entry with the given id.
    ///
    /// Deleting an id that does not exist is an error; there is no
    /// soft-delete or tombstone.
    fn delete(&self, id: &str) -> AppResult<()>;
}

/// SQLite-backed key-value entry store.
///
/// # Examples
///
/// ```no_run
/// use moodlog::storage::{EntryStore, SqliteStore};
/// use std::path::Path;
///
/// let store = SqliteStore::open(Path::new("/tmp/moodlog.db"))?;
/// let entries = store.get_all()?;
/// # Ok::<(), moodlog::errors::AppError>(())
/// ```
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at the given path and ensures the
    /// schema exists.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError::Sqlite` if the database cannot be opened or
    /// the schema cannot be created.
    pub fn open(path: &Path) -> AppResult<Self> {
        info!("Opening mood entry store at {:?}", path);
        let conn = Connection::open(path).map_err(StorageError::Sqlite)?;
        let store = SqliteStore { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store. Useful for tests and ephemeral sessions.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::Sqlite)?;
        let store = SqliteStore { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> AppResult<()> {
        debug!("Ensuring mood_entries schema");
        self.conn
            .execute(
                r#"
                CREATE TABLE IF NOT EXISTS mood_entries (
                    id TEXT PRIMARY KEY,
                    record TEXT NOT NULL
                )
                "#,
                [],
            )
            .map_err(StorageError::Sqlite)?;
        Ok(())
    }
}

impl EntryStore for SqliteStore {
    fn get_all(&self) -> AppResult<Vec<MoodEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, record FROM mood_entries")
            .map_err(StorageError::Sqlite)?;

        let rows: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(StorageError::Sqlite)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(StorageError::Sqlite)?;

        let mut entries = Vec::with_capacity(rows.len());
        for (id, record_json) in rows {
            let record: StoredEntry =
                serde_json::from_str(&record_json).map_err(StorageError::Serialization)?;
            entries.push(MoodEntry::from_record(id, record)?);
        }

        // Records are keyed by opaque id; order snapshots by entry date so
        // downstream consumers see a deterministic sequence.
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        debug!("Loaded {} entries from store", entries.len());
        Ok(entries)
    }

    fn put(&self, entry: &MoodEntry) -> AppResult<()> {
        let record_json =
            serde_json::to_string(&entry.to_record()).map_err(StorageError::Serialization)?;

        self.conn
            .execute(
                r#"
                INSERT INTO mood_entries (id, record)
                VALUES (?1, ?2)
                ON CONFLICT(id) DO UPDATE SET record = excluded.record
                "#,
                params![entry.id, record_json],
            )
            .map_err(StorageError::Sqlite)?;

        debug!("Stored entry {}", entry.id);
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM mood_entries WHERE id = ?1", params![id])
            .map_err(StorageError::Sqlite)?;

        if deleted == 0 {
            return Err(StorageError::NotFound(format!("Entry with id {} not found", id)).into());
        }

        debug!("Deleted entry {}", id);
        Ok(())
    }
}
