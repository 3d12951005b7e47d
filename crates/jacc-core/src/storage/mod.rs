//! Storage layer: byte-level key-value backends and the JSON persistence adapter.

mod kv;
mod persistence;

pub use kv::{KeyValueStore, MemoryStore, SledStore};
pub use persistence::{Persistence, ASSIGNMENTS_STORAGE_KEY, REMINDERS_STORAGE_KEY};
