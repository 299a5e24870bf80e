//! Key/value persistence for the list collection.
//!
//! Defines the [`KeyValueStore`] trait for string-keyed blob storage, two
//! implementations ([`MemoryStore`], [`FileStore`]), and the
//! [`StorageAdapter`] that converts a [`Collection`] to and from a blob
//! under a fixed key.
//!
//! Loading fails soft: a missing key, an unreadable store, or a blob that
//! does not decode all yield an empty collection. Saving reports errors to
//! the caller, which decides how to surface them.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use tasklists_proto::codec;

use crate::lists::Collection;

/// Default key under which the collection is stored.
pub const DEFAULT_KEY: &str = "lists";

/// Errors that can occur during key/value storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The write would exceed the store's capacity.
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        /// Total bytes the store would hold after the write.
        needed: usize,
        /// Configured capacity in bytes.
        quota: usize,
    },

    /// The key cannot be used with this store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The collection could not be encoded.
    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}

/// A string-keyed blob store.
///
/// Implementations include:
/// - [`MemoryStore`]: in-memory map, optionally capacity-limited
/// - [`FileStore`]: one file per key in a directory
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory key/value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty, unlimited store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes once the total size of
    /// keys and values would exceed `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    fn size_with(&self, key: &str, value: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
            + key.len()
            + value.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let needed = self.size_with(key, value);
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// File-backed key/value store.
///
/// Each key maps to `<dir>/<key>.json`. Writes go to a temporary sibling
/// file that is then renamed over the target, so a reader never observes a
/// half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on the
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        let write_tmp = || -> std::io::Result<()> {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()
        };
        write_tmp().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|source| StoreError::Io { path, source })
    }
}

/// Converts the [`Collection`] to and from a blob in a [`KeyValueStore`].
pub struct StorageAdapter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    /// Creates an adapter using [`DEFAULT_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    /// Creates an adapter storing the collection under `key`.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Loads the collection, falling back to an empty one.
    ///
    /// Never fails: read errors and undecodable blobs are logged and treated
    /// as an empty collection.
    #[must_use]
    pub fn load(&self) -> Collection {
        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!(key = %self.key, "no stored lists, starting empty");
                return Collection::new();
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "could not read stored lists");
                return Collection::new();
            }
        };

        match codec::decode(&text) {
            Ok(stored) => {
                let collection = Collection::from_snapshot(stored);
                tracing::info!(
                    key = %self.key,
                    lists = collection.lists().len(),
                    "lists loaded"
                );
                collection
            }
            Err(err) => {
                tracing::warn!(
                    key = %self.key,
                    error = %err,
                    "stored lists are corrupt, starting empty"
                );
                Collection::new()
            }
        }
    }

    /// Serializes the full collection and overwrites the stored blob.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the underlying write fails.
    pub fn save(&mut self, collection: &Collection) -> Result<(), StoreError> {
        let text = codec::encode(&collection.snapshot())?;
        self.store.set(&self.key, &text)?;
        tracing::debug!(key = %self.key, bytes = text.len(), "lists saved");
        Ok(())
    }

    /// Key the collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the adapter, returning the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
