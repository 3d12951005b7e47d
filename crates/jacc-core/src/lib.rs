//! jacc-core: college assistant data core.
//!
//! The [`CollegeData`] provider owns the two mutable collections (assignments and
//! reminders) and persists full snapshots through a key-value store after every
//! mutation. Read-only datasets live in a [`Catalog`] that is passed to whoever needs
//! it, and [`ToolRegistry`] exposes both to a chat assistant as JSON tools.

mod assignments;
pub mod catalog;
mod config;
pub mod dashboard;
pub mod dates;
mod error;
mod provider;
mod records;
mod reminders;
mod seed;
pub mod storage;
pub mod tools;

pub use assignments::AssignmentStore;
pub use catalog::{Catalog, DataSource, StaticSource};
pub use config::JaccConfig;
pub use dashboard::{DashboardSummary, Statistics};
pub use error::{JaccError, JaccResult, RecordKind, StorageError};
pub use provider::CollegeData;
pub use records::{Assignment, AssignmentStatus, NewAssignment, NewReminder, Priority, Reminder};
pub use reminders::ReminderStore;
pub use seed::seed_assignments;
pub use storage::{
    KeyValueStore, MemoryStore, Persistence, SledStore, ASSIGNMENTS_STORAGE_KEY, REMINDERS_STORAGE_KEY,
};
pub use tools::{CollegeTool, ToolContext, ToolRegistry};

use std::sync::Arc;

/// Opens the Sled store under `config.storage_path` and loads the provider from it.
/// If the store cannot be opened the provider still works, without durability.
pub fn open_college_data(config: &JaccConfig) -> CollegeData {
    let seed = if config.seed_assignments {
        seed_assignments()
    } else {
        Vec::new()
    };
    let persistence = match SledStore::open_path(config.store_path()) {
        Ok(store) => Persistence::new(Arc::new(store)),
        Err(e) => {
            tracing::error!(path = %config.store_path().display(), error = %e, "store unavailable; running in memory");
            Persistence::detached()
        }
    };
    CollegeData::open(persistence, seed)
}
