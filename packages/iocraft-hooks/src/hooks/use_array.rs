use crate::hooks::private;
use iocraft::{
    hooks::{State, UseState},
    Hooks,
};
use std::fmt::{self, Debug, Formatter};

/// `UseArray` is a hook that stores an ordered list of values in a component.
///
/// Each mutation replaces the list and causes the component to be re-rendered.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn History(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let mut keys = hooks.use_array(Vec::new);
///     hooks.use_key_down(move |event| {
///         if let KeyCode::Char(c) = event.code {
///             keys.push(c);
///         }
///     });
///
///     element! {
///         Text(content: keys.to_vec().into_iter().collect::<String>())
///     }
/// }
/// ```
pub trait UseArray: private::Sealed {
    /// Creates a new list with its initial contents computed by the given function.
    fn use_array<T, F>(&mut self, initial_value: F) -> ArrayState<T>
    where
        T: Clone + Unpin + Sync + Send + 'static,
        F: FnOnce() -> Vec<T>;
}

impl UseArray for Hooks<'_, '_> {
    fn use_array<T, F>(&mut self, initial_value: F) -> ArrayState<T>
    where
        T: Clone + Unpin + Sync + Send + 'static,
        F: FnOnce() -> Vec<T>,
    {
        ArrayState {
            state: self.use_state(initial_value),
        }
    }
}

/// A copyable handle to a list created by [`UseArray::use_array`].
pub struct ArrayState<T: Send + Sync + 'static> {
    state: State<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for ArrayState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ArrayState<T> {}

impl<T: Send + Sync + 'static> ArrayState<T> {
    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    /// Replaces the entire list.
    pub fn set(&mut self, values: Vec<T>) {
        self.state.set(values);
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        self.set(Vec::new());
    }
}

impl<T: Clone + Send + Sync + 'static> ArrayState<T> {
    /// Returns a copy of the list.
    pub fn to_vec(&self) -> Vec<T> {
        self.state.read().to_vec()
    }

    /// Returns a copy of the value at the given index.
    pub fn get(&self, index: usize) -> Option<T> {
        self.state.read().get(index).cloned()
    }

    /// Appends a value to the end of the list.
    pub fn push(&mut self, value: T) {
        self.modify(|values| values.push(value));
    }

    /// Keeps only the values for which the predicate returns `true`.
    pub fn filter<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.modify(|values| values.retain(predicate));
    }

    /// Replaces the value at the given index. Does nothing if the index is out of bounds.
    pub fn update(&mut self, index: usize, value: T) {
        if index < self.len() {
            self.modify(|values| values[index] = value);
        }
    }

    /// Removes and returns the value at the given index, shifting later values down. Returns
    /// `None` and does nothing if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        let mut removed = None;
        self.modify(|values| removed = Some(values.remove(index)));
        removed
    }

    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        let mut values = self.to_vec();
        f(&mut values);
        self.state.set(values);
    }
}

impl<T: Debug + Send + Sync + 'static> Debug for ArrayState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.read().iter()).finish()
    }
}
