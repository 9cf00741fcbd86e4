//! File-backed storage.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;

use super::{Storage, StorageError};

/// Durable storage backed by a JSON map on disk.
///
/// The whole map is rewritten on every `set`; the browser store this stands
/// in for also commits every write immediately. A missing file reads as an
/// empty store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: FxHashMap<String, String>,
}

impl FileStorage {
    /// Open (or implicitly create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the file exists but cannot be read or
    /// does not decode as a string map.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(error) => return Err(StorageError::Io(error)),
        };

        Ok(Self { path, entries })
    }

    /// Where the store lives on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;

        fs::write(&self.path, raw).map_err(StorageError::Io)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_file_opens_empty() -> TestResult {
        let dir = tempfile::tempdir()?;

        let storage = FileStorage::open(dir.path().join("session.json"))?;

        assert_eq!(storage.get("user")?, None);

        Ok(())
    }

    #[test]
    fn values_survive_reopen() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        {
            let mut storage = FileStorage::open(&path)?;
            storage.set("isLoggedIn", "true")?;
        }

        let reopened = FileStorage::open(&path)?;

        assert_eq!(reopened.get("isLoggedIn")?.as_deref(), Some("true"));

        Ok(())
    }

    #[test]
    fn set_overwrites_on_disk() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path)?;
        storage.set("user", r#"{"name":"a"}"#)?;
        storage.set("user", r#"{"name":"b"}"#)?;

        let reopened = FileStorage::open(&path)?;

        assert_eq!(reopened.get("user")?.as_deref(), Some(r#"{"name":"b"}"#));

        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_codec_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        fs::write(&path, "not json")?;

        let result = FileStorage::open(&path);

        assert!(
            matches!(result, Err(StorageError::Codec(_))),
            "expected Codec error"
        );

        Ok(())
    }
}
