// Persisted board snapshot and the backends that hold it

use crate::filter::FilterState;
use crate::models::{Task, now};
use crate::seed;
use crate::store::TaskStore;
use eyre::{Context, Result};
use fs2::FileExt;
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Slot name the board state is stored under
pub const DEFAULT_SLOT: &str = "kanban-storage";

/// Everything that survives a restart: `{ tasks, filters }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterState>,
}

impl Snapshot {
    pub fn from_store(store: &TaskStore) -> Self {
        Self {
            tasks: store.tasks().to_vec(),
            filters: Some(store.filters().clone()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize snapshot")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot")
    }
}

/// Build the store from whatever was persisted.
///
/// A missing snapshot, or one with no tasks, seeds the built-in default tasks;
/// otherwise the persisted tasks are used as-is. Persisted filters are kept when
/// present, else filters start cleared.
pub fn initialize(loaded: Option<Snapshot>) -> TaskStore {
    initialize_with(loaded, seed::default_tasks)
}

/// Same rule as [`initialize`] with a caller-supplied default task set
pub fn initialize_with<F>(loaded: Option<Snapshot>, defaults: F) -> TaskStore
where
    F: FnOnce() -> Vec<Task>,
{
    let Snapshot { tasks, filters } = loaded.unwrap_or_default();
    let filters = filters.unwrap_or_default();

    let tasks = if tasks.is_empty() {
        let seeded = defaults();
        info!(count = seeded.len(), "No persisted tasks, seeding defaults");
        seeded
    } else {
        info!(count = tasks.len(), "Restored persisted tasks");
        tasks
    };

    TaskStore::new(tasks, filters)
}

/// Opaque load/save storage for a single snapshot
pub trait SnapshotBackend {
    /// `Ok(None)` when nothing usable has been stored
    fn load(&self) -> Result<Option<Snapshot>>;

    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

// Unreadable stored data is treated like an empty slot so the board can still start.
fn parse_stored(source: &str, json: &str) -> Option<Snapshot> {
    match Snapshot::from_json(json) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(source, error = ?e, "Stored snapshot is unreadable, ignoring it");
            None
        }
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Keeps the serialized snapshot in memory; dates still round-trip through strings
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load raw JSON, as if a previous run had written it
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(json.into())),
            saves: Cell::new(0),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.slot.borrow().as_deref().and_then(|json| parse_stored("memory", json)))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        *self.slot.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// ============================================================================
// JSON file backend
// ============================================================================

/// One JSON file per slot: `<dir>/<slot>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    slot: String,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(dir: P, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.lock", self.slot))
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self) -> Result<Option<Snapshot>> {
        let path = self.path();
        if !path.exists() {
            debug!(file = ?path, "No snapshot file yet");
            return Ok(None);
        }

        let json = fs::read_to_string(&path).with_context(|| format!("Failed to read snapshot file {:?}", path))?;
        Ok(parse_stored(&path.to_string_lossy(), &json))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        fs::create_dir_all(&self.dir).context("Failed to create store directory")?;

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())
            .context("Failed to open lock file")?;

        // Acquire exclusive lock before writing
        lock.lock_exclusive().context("Failed to acquire file lock")?;

        let json = snapshot.to_json()?;
        let tmp_path = self.dir.join(format!("{}.json.tmp", self.slot));
        {
            let mut tmp = fs::File::create(&tmp_path).context("Failed to create temp snapshot file")?;
            tmp.write_all(json.as_bytes())?;
            tmp.sync_all()?; // Ensure data is flushed to disk
        }
        fs::rename(&tmp_path, self.path()).context("Failed to replace snapshot file")?;

        debug!(file = ?self.path(), tasks = snapshot.tasks.len(), "Saved snapshot");
        // Lock is released when `lock` is dropped
        Ok(())
    }
}

// ============================================================================
// SQLite backend
// ============================================================================

/// Key/value slots in `<dir>/kanban.db`
pub struct SqliteBackend {
    db: Connection,
    slot: String,
}

impl SqliteBackend {
    pub fn open<P: AsRef<Path>>(dir: P, slot: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).context("Failed to create store directory")?;

        let db_path = dir.join("kanban.db");
        let db = Connection::open(&db_path).context("Failed to open SQLite database")?;

        let backend = Self { db, slot: slot.into() };
        backend.create_schema()?;
        Ok(backend)
    }

    /// Get a reference to the SQLite database connection
    pub fn db(&self) -> &Connection {
        &self.db
    }

    fn create_schema(&self) -> Result<()> {
        debug!("Creating slot schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS slots (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}

impl SnapshotBackend for SqliteBackend {
    fn load(&self) -> Result<Option<Snapshot>> {
        let json: Option<String> = self
            .db
            .query_row("SELECT value FROM slots WHERE name = ?1", [&self.slot], |row| row.get(0))
            .optional()?;

        Ok(json.and_then(|json| parse_stored(&self.slot, &json)))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        self.db.execute(
            "INSERT OR REPLACE INTO slots (name, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![&self.slot, json, now().timestamp_millis()],
        )?;

        debug!(slot = %self.slot, tasks = snapshot.tasks.len(), "Saved snapshot");
        Ok(())
    }
}
