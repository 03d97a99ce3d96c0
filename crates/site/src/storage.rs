//! Durable key-value storage for the mock persistence layer.
//!
//! [`LocalStore`] keeps one JSON document per well-known key, rewritten
//! wholesale on every mutation - one `<key>.json` file per key under the
//! data directory, read and written in full, last writer wins. There is
//! deliberately no cache and no merge: the file is the sole source of
//! truth.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Well-known storage keys.
pub mod keys {
    /// The current authenticated identity record (JSON object or absent).
    pub const CURRENT_USER: &str = "aidconnect-user";

    /// The full ordered contact-message array (JSON array or absent).
    pub const MESSAGES: &str = "aidconnect-messages";

    /// Presence-only flag recording that a language was chosen.
    pub const LANGUAGE_CHOSEN: &str = "aidconnect-language";
}

/// Errors raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document no longer parses as the expected shape.
    #[error("corrupt record under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
enum Backend {
    /// One JSON file per key under the data directory.
    Disk(PathBuf),
    /// Fallback when the data directory is unusable: persistence off,
    /// features on.
    Memory(HashMap<String, String>),
}

/// Key-value store of whole JSON documents.
///
/// All operations are synchronous and rewrite the full record; the inner
/// mutex only serializes writers within this process. Concurrent processes
/// are not coordinated - a stale read is silently overwritten by the next
/// write. Last writer wins.
#[derive(Debug, Clone)]
pub struct LocalStore {
    backend: Arc<Mutex<Backend>>,
}

impl LocalStore {
    /// Open a store rooted at `data_dir`.
    ///
    /// If the directory cannot be created the store degrades to an
    /// in-memory map and logs a single warning; nothing survives a restart
    /// in that mode.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        let backend = match std::fs::create_dir_all(data_dir) {
            Ok(()) => Backend::Disk(data_dir.to_path_buf()),
            Err(e) => {
                tracing::warn!(
                    dir = %data_dir.display(),
                    error = %e,
                    "data directory unusable; falling back to in-memory storage"
                );
                Backend::Memory(HashMap::new())
            }
        };

        Self {
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// A purely in-memory store (used by tests and by the disk fallback).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(Mutex::new(Backend::Memory(HashMap::new()))),
        }
    }

    /// Read and deserialize the whole record under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be read or no longer
    /// parses as `T`. An absent record is `Ok(None)`, not an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let raw = {
            let guard = self.lock();
            match &*guard {
                Backend::Disk(dir) => match std::fs::read_to_string(record_path(dir, key)) {
                    Ok(text) => Some(text),
                    Err(e) if e.kind() == ErrorKind::NotFound => None,
                    Err(e) => {
                        return Err(StorageError::Io {
                            key: key.to_owned(),
                            source: e,
                        });
                    }
                },
                Backend::Memory(map) => map.get(key).cloned(),
            }
        };

        match raw {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| StorageError::Corrupt {
                    key: key.to_owned(),
                    source: e,
                }),
            None => Ok(None),
        }
    }

    /// Serialize `value` and rewrite the whole record under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(|e| StorageError::Corrupt {
            key: key.to_owned(),
            source: e,
        })?;

        let mut guard = self.lock();
        match &mut *guard {
            Backend::Disk(dir) => {
                std::fs::write(record_path(dir, key), text).map_err(|e| StorageError::Io {
                    key: key.to_owned(),
                    source: e,
                })
            }
            Backend::Memory(map) => {
                map.insert(key.to_owned(), text);
                Ok(())
            }
        }
    }

    /// Delete the record under `key`. Absent records are a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file removal fails for a reason other than
    /// the record being absent.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.lock();
        match &mut *guard {
            Backend::Disk(dir) => match std::fs::remove_file(record_path(dir, key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io {
                    key: key.to_owned(),
                    source: e,
                }),
            },
            Backend::Memory(map) => {
                map.remove(key);
                Ok(())
            }
        }
    }

    /// Whether any record exists under `key` (presence-only flags).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let guard = self.lock();
        match &*guard {
            Backend::Disk(dir) => record_path(dir, key).exists(),
            Backend::Memory(map) => map.contains_key(key),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Backend> {
        // A poisoned lock means a panic mid-write; the record on disk is
        // still the source of truth, so continue with the inner state.
        self.backend
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

fn record_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_record_is_none() {
        let store = LocalStore::in_memory();
        let value: Option<Vec<String>> = store.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_wholesale_rewrite() {
        let store = LocalStore::in_memory();
        store.set("k", &vec!["a", "b"]).unwrap();
        store.set("k", &vec!["c"]).unwrap();

        // The second write replaces the record entirely.
        let value: Vec<String> = store.get("k").unwrap().unwrap();
        assert_eq!(value, vec!["c".to_owned()]);
    }

    #[test]
    fn test_remove_and_contains() {
        let store = LocalStore::in_memory();
        assert!(!store.contains("flag"));
        store.set("flag", &true).unwrap();
        assert!(store.contains("flag"));
        store.remove("flag").unwrap();
        assert!(!store.contains("flag"));
        // Removing again is a no-op.
        store.remove("flag").unwrap();
    }

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path());
        store.set(keys::MESSAGES, &vec![1, 2, 3]).unwrap();

        // A second handle over the same directory sees the record: the file
        // is the source of truth, not any in-process state.
        let other = LocalStore::open(dir.path());
        let value: Vec<i32> = other.get(keys::MESSAGES).unwrap().unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_last_writer_wins_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let a = LocalStore::open(dir.path());
        let b = LocalStore::open(dir.path());

        a.set("k", &"from-a").unwrap();
        b.set("k", &"from-b").unwrap();

        let value: String = a.get("k").unwrap().unwrap();
        assert_eq!(value, "from-b");
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("k.json"), "{not json").unwrap();
        let store = LocalStore::open(dir.path());
        let result: Result<Option<Vec<String>>, _> = store.get("k");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }
}
