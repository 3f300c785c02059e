use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::BTreeMap,
    fmt::{self, Debug, Formatter},
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock},
};

/// An error produced by a [`LocalStorage`] operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing file could not be read or written.
    #[error("storage file {}: {source}", .path.display())]
    Io {
        /// The path of the backing file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A stored value or the backing file was not valid JSON.
    #[error("invalid json in storage: {0}")]
    Json(#[from] serde_json::Error),
}

struct LocalStorageInner {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl LocalStorageInner {
    // The store file is only ever replaced by renaming a fully written sibling over it.
    fn flush(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let contents = serde_json::to_string_pretty(&self.items)?;
        let mut temp_path = path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);
        fs::write(&temp_path, contents)
            .and_then(|()| fs::rename(&temp_path, path))
            .map_err(|source| {
                let _ = fs::remove_file(&temp_path);
                StorageError::Io {
                    path: path.clone(),
                    source,
                }
            })
    }

    /// Applies a change and flushes it, restoring the previous items if the flush fails.
    fn modify<F>(&mut self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let previous = self.path.as_ref().map(|_| self.items.clone());
        if !f(&mut self.items) {
            return Ok(());
        }
        let result = self.flush();
        if result.is_err() {
            if let Some(previous) = previous {
                self.items = previous;
            }
        }
        result
    }
}

/// `LocalStorage` is a string key/value store, shared by cloning.
///
/// A store is either purely in memory or backed by a JSON file, in which case every mutation is
/// written through to the file. Hooks such as
/// [`use_local_storage`](crate::hooks::UseLocalStorage::use_local_storage) look for a store in
/// the component's context and fall back to [`LocalStorage::global`].
///
/// # Example
///
/// ```no_run
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// # #[component]
/// # fn App() -> impl Into<AnyElement<'static>> { element!(View) }
/// # fn main() -> Result<(), StorageError> {
/// let storage = LocalStorage::open("settings.json")?;
/// let app = element! {
///     ContextProvider(value: Context::owned(storage)) {
///         App
///     }
/// };
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LocalStorage {
    inner: Arc<Mutex<LocalStorageInner>>,
}

impl LocalStorage {
    /// Creates an empty store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::with_items(None, BTreeMap::new())
    }

    /// Opens a store backed by the JSON file at the given path.
    ///
    /// If the file doesn't exist yet, the store starts out empty and the file is created on the
    /// first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let items = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        log::debug!("opened storage {} with {} items", path.display(), items.len());
        Ok(Self::with_items(Some(path), items))
    }

    /// Returns the process-wide in-memory store.
    ///
    /// This is the store used by hooks when no [`LocalStorage`] is available via context. It is
    /// never written to disk, so its contents are lost when the process exits.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<LocalStorage> = OnceLock::new();
        GLOBAL.get_or_init(Self::in_memory).clone()
    }

    fn with_items(path: Option<PathBuf>, items: BTreeMap<String, String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LocalStorageInner { path, items })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LocalStorageInner> {
        self.inner
            .lock()
            .expect("we should be able to lock the mutex")
    }

    /// Returns the path of the backing file, if there is one.
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    /// Returns the value stored under the given key.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.lock().items.get(key).cloned()
    }

    /// Stores a value under the given key, replacing any previous value.
    ///
    /// If the backing file can't be written, the store is left unchanged.
    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let value = value.into();
        self.lock().modify(|items| {
            items.insert(key.to_string(), value);
            true
        })
    }

    /// Removes the value stored under the given key. Removing a missing key is not an error.
    ///
    /// If the backing file can't be written, the store is left unchanged.
    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock().modify(|items| items.remove(key).is_some())
    }

    /// Removes every value from the store.
    ///
    /// If the backing file can't be written, the store is left unchanged.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.lock().modify(|items| {
            let changed = !items.is_empty();
            items.clear();
            changed
        })
    }

    /// Returns all keys in the store, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.lock().items.keys().cloned().collect()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Reads the value stored under the given key and deserializes it from JSON.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_item(key) {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    /// Serializes the value as JSON and stores it under the given key.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_string(value)?;
        self.set_item(key, value)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Debug for LocalStorage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("LocalStorage")
            .field("path", &inner.path)
            .field("len", &inner.items.len())
            .finish()
    }
}
