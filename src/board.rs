// TaskStore bound to a snapshot backend

use crate::models::Task;
use crate::snapshot::{Snapshot, SnapshotBackend, initialize, initialize_with};
use crate::store::TaskStore;
use eyre::Result;
use tracing::{debug, warn};

/// A hydrated store that persists itself after every mutation
///
/// The snapshot is loaded exactly once, in `open`, so nothing can read the
/// board before hydration has finished.
pub struct Board<B: SnapshotBackend> {
    store: TaskStore,
    backend: B,
}

impl<B: SnapshotBackend> Board<B> {
    /// Load from `backend`, seeding the default tasks if nothing was stored
    pub fn open(backend: B) -> Result<Self> {
        let loaded = backend.load()?;
        Ok(Self {
            store: initialize(loaded),
            backend,
        })
    }

    /// Load from `backend`, falling back to `defaults()` if nothing was stored
    pub fn open_with<F>(backend: B, defaults: F) -> Result<Self>
    where
        F: FnOnce() -> Vec<Task>,
    {
        let loaded = backend.load()?;
        Ok(Self {
            store: initialize_with(loaded, defaults),
            backend,
        })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply `f` to the store, then save.
    ///
    /// Saving is fire-and-forget: a failed save is logged and the mutation stands.
    pub fn mutate<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut TaskStore) -> R,
    {
        let result = f(&mut self.store);
        if let Err(e) = self.save() {
            warn!(error = ?e, "Failed to persist board snapshot");
        }
        result
    }

    /// Write the current state to the backend
    pub fn save(&self) -> Result<()> {
        let snapshot = Snapshot::from_store(&self.store);
        self.backend.save(&snapshot)?;
        debug!(tasks = snapshot.tasks.len(), "Board saved");
        Ok(())
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }
}
