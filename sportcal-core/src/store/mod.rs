//! Client-local key-value storage.
//!
//! Values are raw strings, so a corrupt value is visible to readers exactly as
//! it was written. `FileStore` backs both the persistent store and the
//! per-session transient store; `MemoryStore` backs the unit tests.

mod events;
mod file;
mod memory;

pub use events::{EVENTS_KEY, EventStore};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A string-valued key-value store.
pub trait KeyValueStore {
    /// Read the raw value under `key`. `Ok(None)` means absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
