//! Best-effort JSON key-value store.
//!
//! One file per key under a data directory. The contract is deliberately
//! forgiving: a failed read returns the caller-supplied default, a failed
//! write logs and no-ops. Nothing here ever propagates an error; the
//! application always has *some* value to work with.

use garten_core::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write; a missing directory
    /// on read simply yields defaults.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Read the value stored under `key`, or `default` when the key is
    /// absent, unreadable or malformed.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path_for(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    let err = StorageError::Read {
                        key: key.to_string(),
                        message: e.to_string(),
                    };
                    tracing::warn!("{}", err);
                }
                return default;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                let err = StorageError::Read {
                    key: key.to_string(),
                    message: format!("malformed JSON: {e}"),
                };
                tracing::warn!("{}", err);
                default
            }
        }
    }

    /// Write `value` under `key`. Failures are logged and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let path = self.path_for(key);

        if let Err(e) = std::fs::create_dir_all(&self.data_dir) {
            let err = StorageError::Unavailable(format!(
                "cannot create '{}': {e}",
                self.data_dir.display()
            ));
            tracing::error!("{}", err);
            return;
        }

        let contents = match serde_json::to_string_pretty(value) {
            Ok(c) => c,
            Err(e) => {
                let err = StorageError::Serialize {
                    key: key.to_string(),
                    message: e.to_string(),
                };
                tracing::error!("{}", err);
                return;
            }
        };

        if let Err(e) = std::fs::write(&path, contents) {
            let err = StorageError::Unavailable(format!("cannot write '{}': {e}", path.display()));
            tracing::error!("{}", err);
        }
    }

    /// Remove the value stored under `key`, if any.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to remove '{}': {}", path.display(), e);
            }
        }
    }

    /// True when a value exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}
