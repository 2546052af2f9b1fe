//! durable key-value storage for user preferences
use {
    crate::error::{Result, ShopError},
    hashbrown::HashMap,
    redb::{Database, ReadableDatabase, TableDefinition, TableError},
    std::{
        fs::create_dir_all,
        path::{Path, PathBuf},
        sync::{Arc, Mutex},
    },
    tracing::debug,
};

/// the table holding every preference
const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// a synchronous, local key-value store
pub trait PreferenceStore: Send {
    /// read the value stored under `key`
    ///
    /// # Errors
    ///
    /// returns an error if the backing storage can't be read
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// returns an error if the backing storage can't be written
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// preferences kept in a redb database file
///
/// the database is opened for every operation so several running instances can share one file,
/// the last writer wins
#[derive(Debug, Clone)]
pub struct RedbPreferences {
    /// the path to the database file
    path: PathBuf,
}

impl RedbPreferences {
    /// the file name used inside the data directory
    pub const FILE_NAME: &'static str = "preferences.redb";

    /// use the database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// use the database in the platform data directory
    ///
    /// # Errors
    ///
    /// returns [`ShopError::StorageUnavailable`] if there's no data directory on this platform
    pub fn in_data_dir() -> Result<Self> {
        let data_dir = dirs::data_local_dir().ok_or_else(|| {
            ShopError::StorageUnavailable("unable to determine the local data directory".into())
        })?;

        Ok(Self::new(
            data_dir.join(env!("CARGO_PKG_NAME")).join(Self::FILE_NAME),
        ))
    }

    /// the path to the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// open (or create) the database
    fn open(&self) -> Result<Database> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }

        Ok(Database::create(&self.path)?)
    }
}

impl PreferenceStore for RedbPreferences {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no preference file yet");
            return Ok(None);
        }

        let db = self.open()?;
        let read_txn = db.begin_read()?;
        let table = match read_txn.open_table(PREFERENCES_TABLE) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let db = self.open()?;
        let write_txn = db.begin_write()?;

        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }

        write_txn.commit()?;
        debug!(key, value, path = %self.path.display(), "preference saved");

        Ok(())
    }
}

/// preferences kept in memory, shared between clones
///
/// used when persistence is turned off, and as a stand-in storage in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    /// the stored entries
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    /// make an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// make a store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), value.to_string());
        store
    }

    /// how many entries are stored
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// lock the entries, recovering from a poisoned lock
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferences {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redb_missing_file_reads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = RedbPreferences::new(dir.path().join("nested").join("prefs.redb"));

        assert_eq!(prefs.read("app-theme").unwrap(), None);
        assert!(!prefs.path().exists());
    }

    #[test]
    fn test_redb_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.redb");
        let prefs = RedbPreferences::new(&path);

        prefs.write("app-theme", "theme2").unwrap();
        prefs.write("app-theme", "theme3").unwrap();

        let reopened = RedbPreferences::new(&path);
        assert_eq!(reopened.read("app-theme").unwrap().as_deref(), Some("theme3"));
        assert_eq!(reopened.read("other").unwrap(), None);
    }

    #[test]
    fn test_redb_unwritable_location_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let prefs = RedbPreferences::new(blocker.join("prefs.redb"));
        let err = prefs.write("app-theme", "theme1").unwrap_err();

        assert!(err.is_storage());
    }

    #[test]
    fn test_memory_store_is_shared_between_clones() {
        let prefs = MemoryPreferences::with_entry("app-theme", "theme1");
        let handle = prefs.clone();

        prefs.write("app-theme", "theme3").unwrap();

        assert_eq!(handle.read("app-theme").unwrap().as_deref(), Some("theme3"));
        assert_eq!(handle.len(), 1);
    }
}
