use crate::hooks::private;
use iocraft::{hooks::UseTerminalSize, Hooks};

/// The size of the terminal window, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowSize {
    /// The number of columns.
    pub width: u16,

    /// The number of rows.
    pub height: u16,
}

impl From<(u16, u16)> for WindowSize {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

/// `UseWindowSize` is a hook that tracks the size of the terminal window.
///
/// When the terminal is resized, the component will be re-rendered with the new size.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn Ruler(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let size = hooks.use_window_size();
///
///     element! {
///         Text(content: "-".repeat(size.width as usize))
///     }
/// }
/// ```
pub trait UseWindowSize: private::Sealed {
    /// Returns the current size of the terminal window.
    ///
    /// If the size can't be determined, for example because output isn't a terminal, the size is
    /// zero until the first resize event arrives.
    fn use_window_size(&mut self) -> WindowSize;
}

impl UseWindowSize for Hooks<'_, '_> {
    fn use_window_size(&mut self) -> WindowSize {
        self.use_terminal_size().into()
    }
}
