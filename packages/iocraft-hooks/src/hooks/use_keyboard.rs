use crate::hooks::private;
use iocraft::{hooks::UseTerminalEvents, Hooks, KeyCode, KeyEvent, KeyEventKind, TerminalEvent};

/// `UseKeyboard` is a hook that allows you to respond to key strokes.
///
/// Only key-down events are delivered: presses and auto-repeats. Key releases, which some
/// terminals report, are ignored.
///
/// The callback is replaced on every render, so events always reach the closure from the most
/// recent render.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[component]
/// fn Counter(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let mut count = hooks.use_state(|| 0);
///     hooks.use_key_press(KeyCode::Char('+'), move || count += 1);
///
///     element! {
///         Text(content: format!("count: {}", count))
///     }
/// }
/// ```
pub trait UseKeyboard: private::Sealed {
    /// Defines a callback to be invoked whenever a key goes down.
    fn use_key_down<F>(&mut self, f: F)
    where
        F: FnMut(KeyEvent) + Send + 'static;

    /// Defines a callback to be invoked whenever the given key goes down.
    fn use_key_press<F>(&mut self, code: KeyCode, f: F)
    where
        F: FnMut() + Send + 'static;
}

impl UseKeyboard for Hooks<'_, '_> {
    fn use_key_down<F>(&mut self, mut f: F)
    where
        F: FnMut(KeyEvent) + Send + 'static,
    {
        self.use_terminal_events(move |event| match event {
            TerminalEvent::Key(event) if is_key_down(&event) => f(event),
            _ => {}
        });
    }

    fn use_key_press<F>(&mut self, code: KeyCode, mut f: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.use_key_down(move |event| {
            if event.code == code {
                f();
            }
        });
    }
}

fn is_key_down(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use futures::stream::{self, StreamExt};
    use iocraft::prelude::*;
    use macro_rules_attribute::apply;
    use smol_macros::test;

    #[component]
    fn MyComponent(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut system = hooks.use_context_mut::<SystemContext>();
        let mut chars = hooks.use_state(|| 0);
        let mut should_exit = hooks.use_state(|| false);

        hooks.use_key_down(move |event| {
            if let KeyCode::Char(_) = event.code {
                chars += 1;
            }
        });
        hooks.use_key_press(KeyCode::Enter, move || should_exit.set(true));

        if should_exit.get() {
            system.exit();
        }

        element! {
            Text(content: format!("chars: {}", chars))
        }
    }

    #[apply(test!)]
    async fn test_use_keyboard() {
        let actual = element!(MyComponent)
            .mock_terminal_render_loop(MockTerminalConfig::with_events(stream::iter(vec![
                TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Char('h'))),
                TerminalEvent::Key(KeyEvent::new(KeyEventKind::Release, KeyCode::Char('h'))),
                TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Char('i'))),
                TerminalEvent::Key(KeyEvent::new(KeyEventKind::Repeat, KeyCode::Char('i'))),
                TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Enter)),
            ])))
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .await;
        assert_eq!(actual.last().unwrap(), "chars: 3\n");
    }

    #[test]
    fn test_is_key_down() {
        assert!(super::is_key_down(&KeyEvent::new(
            KeyEventKind::Press,
            KeyCode::Esc
        )));
        assert!(super::is_key_down(&KeyEvent::new(
            KeyEventKind::Repeat,
            KeyCode::Esc
        )));
        assert!(!super::is_key_down(&KeyEvent::new(
            KeyEventKind::Release,
            KeyCode::Esc
        )));
    }
}
