use crate::hooks::private;
use iocraft::{
    hooks::{UseState, UseTerminalEvents},
    FullscreenMouseEvent, Hooks, TerminalEvent,
};

/// A position within the terminal, in zero-based cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MousePosition {
    /// The column.
    pub x: u16,

    /// The row.
    pub y: u16,
}

/// `UseMousePosition` is a hook that tracks the last known position of the mouse pointer.
///
/// Terminals only report mouse events while in fullscreen mode, so outside of a fullscreen render
/// loop the position stays at the origin.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn Crosshair(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let position = hooks.use_mouse_position();
///
///     element! {
///         View(padding_left: position.x, padding_top: position.y) {
///             Text(content: "+")
///         }
///     }
/// }
/// ```
pub trait UseMousePosition: private::Sealed {
    /// Returns the position of the mouse pointer as of the most recent mouse event.
    fn use_mouse_position(&mut self) -> MousePosition;
}

impl UseMousePosition for Hooks<'_, '_> {
    fn use_mouse_position(&mut self) -> MousePosition {
        let mut position = self.use_state(MousePosition::default);
        self.use_terminal_events(move |event| {
            // Every kind of mouse event carries the pointer location, not just moves.
            if let TerminalEvent::FullscreenMouse(FullscreenMouseEvent { column, row, .. }) = event
            {
                let new_position = MousePosition { x: column, y: row };
                if position.get() != new_position {
                    position.set(new_position);
                }
            }
        });
        position.get()
    }
}
