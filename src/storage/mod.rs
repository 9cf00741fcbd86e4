//! Session storage
//!
//! A durable string key-value store standing in for browser local storage.
//! The auth flow keeps exactly two keys in it: the JSON-encoded account
//! record under `user` and the literal string `"true"` under `isLoggedIn`.
//! No delete operation is exposed; nothing in the storefront ever clears a
//! key. Writes are last-write-wins with no multi-key transaction guarantee.

use std::io;

use rustc_hash::FxHashMap;
use thiserror::Error;

mod file;

pub use file::FileStorage;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("storage I/O error")]
    Io(#[source] io::Error),

    /// The backing file held something other than a string map.
    #[error("storage decode error")]
    Codec(#[from] serde_json::Error),
}

/// A durable string key-value store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
