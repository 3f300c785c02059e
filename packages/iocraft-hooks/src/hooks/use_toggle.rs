use crate::hooks::private;
use iocraft::{
    hooks::{State, UseState},
    Hooks,
};
use std::fmt::{self, Debug, Display, Formatter};

/// `UseToggle` is a hook that stores a boolean which can be flipped.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn Details(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let mut expanded = hooks.use_toggle(false);
///     hooks.use_key_press(KeyCode::Tab, move || expanded.toggle());
///
///     element! {
///         Text(content: if expanded.get() { "[-] details" } else { "[+] details" })
///     }
/// }
/// ```
pub trait UseToggle: private::Sealed {
    /// Creates a new toggle with the given initial value.
    ///
    /// When the toggle changes, the component will be re-rendered.
    fn use_toggle(&mut self, initial_value: bool) -> Toggle;
}

impl UseToggle for Hooks<'_, '_> {
    fn use_toggle(&mut self, initial_value: bool) -> Toggle {
        Toggle {
            state: self.use_state(|| initial_value),
        }
    }
}

/// A copyable handle to a boolean created by [`UseToggle::use_toggle`].
#[derive(Clone, Copy)]
pub struct Toggle {
    state: State<bool>,
}

impl Toggle {
    /// Gets the current value.
    pub fn get(&self) -> bool {
        self.state.get()
    }

    /// Flips the value.
    pub fn toggle(&mut self) {
        let value = self.state.get();
        self.state.set(!value);
    }

    /// Sets the value.
    pub fn set(&mut self, value: bool) {
        self.state.set(value);
    }

    /// Sets the value to `true`.
    pub fn on(&mut self) {
        self.set(true);
    }

    /// Sets the value to `false`.
    pub fn off(&mut self) {
        self.set(false);
    }
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle.get()
    }
}

impl PartialEq<bool> for Toggle {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl Debug for Toggle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.get(), f)
    }
}

impl Display for Toggle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.get(), f)
    }
}
