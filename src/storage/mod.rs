//! Durable key/value storage for session tokens and profiles
//!
//! Sessions only ever need `get`/`set`/`remove` on string values, the same
//! contract a browser's local storage offers.

pub mod file;
pub mod memory;

use std::sync::Arc;

use crate::{
    config::{StorageBackend, StorageConfig},
    error::AppResult,
};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque string key/value store
pub trait KeyValueStore: Send + Sync {
    /// Read a value; missing keys and unreadable backends both yield `None`
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key; removing an absent key succeeds
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Build the store selected by configuration
pub fn open(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::File => Ok(Arc::new(FileStore::open(config.path.clone())?)),
    }
}
