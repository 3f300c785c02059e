use crate::{hooks::private, LocalStorage, StorageError};
use iocraft::{
    hooks::{State, UseContext, UseState},
    Hook, Hooks,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

/// `UseLocalStorage` is a hook that stores a value in a component and persists it in a
/// [`LocalStorage`].
///
/// On the first render the value is read from storage. If the key is missing, the initial
/// value is used and written to storage. If the stored value can't be deserialized, the initial
/// value is used but the stored value is left untouched until the state is next set. Values are
/// stored as JSON.
///
/// The storage is taken from the component's context if a [`LocalStorage`] has been provided
/// there, otherwise [`LocalStorage::global`] is used. The global store lives only in memory, so
/// values only survive across runs when a file-backed store from [`LocalStorage::open`] is
/// provided via context.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn Visits(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let visits = hooks.use_local_storage("visits", || 0u32);
///     hooks.use_key_press(KeyCode::Char('v'), {
///         let mut visits = visits.clone();
///         move || visits.update(|n| *n += 1)
///     });
///
///     element! {
///         Text(content: format!("visits: {}", visits))
///     }
/// }
/// ```
pub trait UseLocalStorage: private::Sealed {
    /// Creates a new persisted state for the given key, with its initial value computed by the
    /// given function if nothing is stored yet.
    ///
    /// The key is fixed on the first render. When the state changes, the component will be
    /// re-rendered.
    fn use_local_storage<T, F>(&mut self, key: &str, initial_value: F) -> StoredState<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Sync + Send + 'static,
        F: FnOnce() -> T;
}

impl UseLocalStorage for Hooks<'_, '_> {
    fn use_local_storage<T, F>(&mut self, key: &str, initial_value: F) -> StoredState<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Sync + Send + 'static,
        F: FnOnce() -> T,
    {
        let storage = self
            .try_use_context::<LocalStorage>()
            .map(|storage| LocalStorage::clone(&storage))
            .unwrap_or_else(LocalStorage::global);
        let key = key.to_string();
        let (storage, key) = {
            let hook = self.use_hook(move || UseLocalStorageImpl {
                storage,
                key: key.into(),
            });
            (hook.storage.clone(), hook.key.clone())
        };
        let state = self.use_state(|| load_or_init(&storage, &key, initial_value));
        StoredState {
            state,
            storage,
            key,
        }
    }
}

struct UseLocalStorageImpl {
    storage: LocalStorage,
    key: Arc<str>,
}

impl Hook for UseLocalStorageImpl {}

fn load_or_init<T, F>(storage: &LocalStorage, key: &str, initial_value: F) -> T
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> T,
{
    match storage.get_json(key) {
        Ok(Some(value)) => value,
        Ok(None) => {
            let value = initial_value();
            if let Err(err) = storage.set_json(key, &value) {
                log::warn!("unable to persist initial value for {:?}: {}", key, err);
            }
            value
        }
        // The stored value is left alone until the component sets a new one.
        Err(err) => {
            log::warn!("ignoring unreadable stored value for {:?}: {}", key, err);
            initial_value()
        }
    }
}

/// A handle to a persisted value created by [`UseLocalStorage::use_local_storage`].
pub struct StoredState<T: Send + Sync + 'static> {
    state: State<T>,
    storage: LocalStorage,
    key: Arc<str>,
}

impl<T: Send + Sync + 'static> Clone for StoredState<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            storage: self.storage.clone(),
            key: self.key.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> StoredState<T> {
    /// Returns the key the value is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the storage the value is persisted to.
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Deletes the key from storage. The component's current value is left untouched, so the
    /// key will be written again on the next change.
    pub fn remove(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

impl<T: Clone + Send + Sync + 'static> StoredState<T> {
    /// Gets a copy of the current value.
    pub fn get(&self) -> T {
        T::clone(&self.state.read())
    }
}

impl<T: Serialize + Send + Sync + 'static> StoredState<T> {
    /// Sets the value and writes it to storage.
    ///
    /// The value is updated even if it can't be persisted, in which case a warning is logged.
    /// Use [`try_set`](Self::try_set) to handle the error instead.
    pub fn set(&mut self, value: T) {
        if let Err(err) = self.try_set(value) {
            log::warn!("unable to persist value for {:?}: {}", self.key, err);
        }
    }

    /// Sets the value and writes it to storage, returning any error encountered while writing.
    ///
    /// The value is updated even if it can't be persisted.
    pub fn try_set(&mut self, value: T) -> Result<(), StorageError> {
        let result = self.storage.set_json(&self.key, &value);
        self.state.set(value);
        result
    }
}

impl<T: Clone + Serialize + Send + Sync + 'static> StoredState<T> {
    /// Modifies the value with the given function and writes the result to storage.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }
}

impl<T: Debug + Send + Sync + 'static> Debug for StoredState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.state.read(), f)
    }
}

impl<T: Display + Send + Sync + 'static> Display for StoredState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.state.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use futures::stream::{self, StreamExt};
    use iocraft::prelude::*;
    use macro_rules_attribute::apply;
    use smol_macros::test;

    #[component]
    fn Greeting(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let name = hooks.use_local_storage("name", || "world".to_string());
        element! {
            Text(content: format!("hello, {}", name))
        }
    }

    fn render_with(storage: &LocalStorage) -> String {
        element! {
            ContextProvider(value: Context::owned(storage.clone())) {
                Greeting
            }
        }
        .to_string()
    }

    #[test]
    fn test_reads_stored_value() {
        let storage = LocalStorage::in_memory();
        storage.set_json("name", "ferris").unwrap();
        assert_eq!(render_with(&storage), "hello, ferris\n");
    }

    #[test]
    fn test_writes_initial_value() {
        let storage = LocalStorage::in_memory();
        assert_eq!(render_with(&storage), "hello, world\n");
        assert_eq!(storage.get_item("name").as_deref(), Some("\"world\""));
    }

    #[test]
    fn test_keeps_unreadable_value() {
        let storage = LocalStorage::in_memory();
        storage.set_item("name", "ferris").unwrap();
        assert_eq!(render_with(&storage), "hello, world\n");
        assert_eq!(storage.get_item("name").as_deref(), Some("ferris"));
    }

    #[component]
    fn Removed(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let value = hooks.use_local_storage("removed", || true);
        assert!(value.storage().get_item("removed").is_some());
        value.remove().unwrap();
        assert!(value.storage().get_item("removed").is_none());
        element! {
            Text(content: value.get().to_string())
        }
    }

    #[test]
    fn test_remove_keeps_value() {
        let storage = LocalStorage::in_memory();
        let s = element! {
            ContextProvider(value: Context::owned(storage.clone())) {
                Removed
            }
        }
        .to_string();
        assert_eq!(s, "true\n");
        assert!(storage.is_empty());
    }

    #[component]
    fn Unwritable(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut value = hooks.use_local_storage("n", || 1);
        let err = value.try_set(2).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert_eq!(value.storage().get_item("n"), None);
        element! {
            Text(content: format!("n: {}", value))
        }
    }

    #[test]
    fn test_try_set_reports_write_error() {
        let path = std::env::temp_dir()
            .join(format!("iocraft-hooks-missing-{}", uuid::Uuid::new_v4()))
            .join("store.json");
        let storage = LocalStorage::open(&path).unwrap();
        let s = element! {
            ContextProvider(value: Context::owned(storage.clone())) {
                Unwritable
            }
        }
        .to_string();
        assert_eq!(s, "n: 2\n");
        assert!(storage.is_empty());
    }

    #[component]
    fn Counter(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut system = hooks.use_context_mut::<SystemContext>();
        let count = hooks.use_local_storage("count", || 0);
        let mut should_exit = hooks.use_state(|| false);

        hooks.use_key_down({
            let mut count = count.clone();
            move |event| match event.code {
                KeyCode::Up => count.update(|n| *n += 1),
                KeyCode::Char('0') => count.set(0),
                KeyCode::Enter => should_exit.set(true),
                _ => {}
            }
        });

        assert_eq!(count.key(), "count");
        if should_exit.get() {
            system.exit();
        }

        element! {
            Text(content: format!("count: {}", count))
        }
    }

    #[apply(test!)]
    async fn test_persists_changes() {
        let storage = LocalStorage::in_memory();
        storage.set_json("count", &41).unwrap();

        let actual = element! {
            ContextProvider(value: Context::owned(storage.clone())) {
                Counter
            }
        }
        .mock_terminal_render_loop(MockTerminalConfig::with_events(stream::iter(vec![
            TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Up)),
            TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Enter)),
        ])))
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .await;

        assert_eq!(actual.first().unwrap(), "count: 41\n");
        assert_eq!(actual.last().unwrap(), "count: 42\n");
        assert_eq!(storage.get_json::<i32>("count").unwrap(), Some(42));
    }

    #[component]
    fn GlobalValue(mut hooks: Hooks, props: &GlobalValueProps) -> impl Into<AnyElement<'static>> {
        let value = hooks.use_local_storage(&props.storage_key, || 7u8);
        element! {
            Text(content: format!("{:?}", value))
        }
    }

    #[derive(Default, Props)]
    struct GlobalValueProps {
        storage_key: String,
    }

    #[test]
    fn test_falls_back_to_global_storage() {
        let key = format!("test-{}", uuid::Uuid::new_v4());
        assert_eq!(element!(GlobalValue(storage_key: key.clone())).to_string(), "7\n");
        assert_eq!(
            LocalStorage::global().get_json::<u8>(&key).unwrap(),
            Some(7)
        );

        let stored = LocalStorage::global();
        stored.set_json(&key, &9u8).unwrap();
        assert_eq!(element!(GlobalValue(storage_key: key.clone())).to_string(), "9\n");
        stored.remove_item(&key).unwrap();
    }

    #[test]
    fn test_file_backed_storage() {
        let path =
            std::env::temp_dir().join(format!("iocraft-hooks-{}.json", uuid::Uuid::new_v4()));
        let storage = LocalStorage::open(&path).unwrap();
        assert_eq!(render_with(&storage), "hello, world\n");

        let reopened = LocalStorage::open(&path).unwrap();
        reopened.set_json("name", "again").unwrap();
        assert_eq!(render_with(&reopened), "hello, again\n");

        std::fs::remove_file(&path).unwrap();
    }
}
