//! Durable key/value storage
//!
//! The engine persists two JSON records through the [`Store`] port. Any
//! string-keyed, string-valued store satisfies it; writes are last-write-wins.
//! A payload that fails to parse is indistinguishable from a missing key.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
    #[error("failed to write '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key/value store supplied by the host
pub trait Store {
    /// Stored value for `key`, or `None` if absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the key exists but could not be removed.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Load and parse a JSON record; malformed payloads count as absent
pub fn load_record<T: DeserializeOwned>(store: &impl Store, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(key, %err, "discarding unreadable record");
            None
        }
    }
}

/// Serialize and store a JSON record
///
/// # Errors
///
/// Returns `StoreError` if serialization or the write fails.
pub fn save_record<T: Serialize>(
    store: &mut impl Store,
    key: &str,
    record: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(record).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}
