// Kanban board state: task store, filters, column ordering and a persisted snapshot

pub mod board;
pub mod config;
pub mod filter;
pub mod models;
pub mod seed;
pub mod snapshot;
pub mod store;

// Re-export main types for convenience
pub use board::Board;
pub use config::{BackendKind, Config};
pub use filter::{FilterPatch, FilterState};
pub use models::{DueState, Priority, Subtask, Task, TaskStatus, TaskUpdate, generate_task_id, now};
pub use snapshot::{
    DEFAULT_SLOT, FileBackend, MemoryBackend, Snapshot, SnapshotBackend, SqliteBackend, initialize, initialize_with,
};
pub use store::{TaskStore, VisibleIndex};
