use crate::hooks::{hash_deps, private, UseTimeout};
use core::hash::Hash;
use iocraft::{Hook, Hooks};
use std::time::Duration;

/// `UseDebounce` is a hook that runs a callback once its dependencies have stopped changing for
/// a given delay.
///
/// Nothing is scheduled on the first render. Each time the dependencies change, the timer
/// restarts, so a burst of changes results in a single invocation after the burst settles.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// # use std::time::Duration;
/// #[derive(Default, Props)]
/// struct SearchProps {
///     query: String,
/// }
///
/// #[component]
/// fn Search(mut hooks: Hooks, props: &SearchProps) -> impl Into<AnyElement<'static>> {
///     let mut searched_for = hooks.use_state(String::new);
///     let query = props.query.clone();
///     hooks.use_debounce(
///         move || searched_for.set(query.clone()),
///         Duration::from_millis(300),
///         &props.query,
///     );
///
///     element! {
///         Text(content: format!("results for {:?}", searched_for.read().as_str()))
///     }
/// }
/// ```
pub trait UseDebounce: private::Sealed {
    /// Runs the given function once `delay` has elapsed without the dependency argument changing.
    ///
    /// Changes to the dependencies are detected solely via the [`Hash`](std::hash::Hash) trait, so
    /// this function will hash them but not store them.
    ///
    /// To provide multiple dependencies, place your dependencies in a tuple.
    fn use_debounce<F, D>(&mut self, f: F, delay: Duration, deps: D)
    where
        F: FnMut() + Send + 'static,
        D: Hash;
}

impl UseDebounce for Hooks<'_, '_> {
    fn use_debounce<F, D>(&mut self, f: F, delay: Duration, deps: D)
    where
        F: FnMut() + Send + 'static,
        D: Hash,
    {
        let deps_hash = hash_deps(deps);
        let timeout = self.use_timeout(f, delay);
        let hook = self.use_hook(UseDebounceImpl::default);
        match hook.deps_hash {
            None => timeout.clear(),
            Some(prev) if prev != deps_hash => timeout.reset(),
            Some(_) => {}
        }
        hook.deps_hash = Some(deps_hash);
    }
}

#[derive(Default)]
struct UseDebounceImpl {
    deps_hash: Option<u64>,
}

impl Hook for UseDebounceImpl {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use futures::stream::{self, StreamExt};
    use iocraft::prelude::*;
    use macro_rules_attribute::apply;
    use smol_macros::test;
    use std::time::Duration;

    #[component]
    fn Typing(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut system = hooks.use_context_mut::<SystemContext>();
        let mut typed = hooks.use_state(|| 0);
        let mut settled = hooks.use_state(|| 0);

        hooks.use_key_down(move |_| typed += 1);
        let current = typed.get();
        hooks.use_debounce(
            move || settled.set(current),
            Duration::from_millis(50),
            current,
        );

        if settled.get() == 3 {
            system.exit();
        }

        element! {
            Text(content: format!("typed: {}, settled: {}", typed, settled))
        }
    }

    #[apply(test!)]
    async fn test_use_debounce() {
        let actual = element!(Typing)
            .mock_terminal_render_loop(MockTerminalConfig::with_events(stream::iter(
                "abc".chars().map(|c| {
                    TerminalEvent::Key(KeyEvent::new(KeyEventKind::Press, KeyCode::Char(c)))
                }),
            )))
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .await;
        assert_eq!(actual.first().unwrap(), "typed: 0, settled: 0\n");
        assert_eq!(actual.last().unwrap(), "typed: 3, settled: 3\n");
    }

    #[component]
    fn Quiet(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
        let mut system = hooks.use_context_mut::<SystemContext>();
        let mut debounced = hooks.use_state(|| false);
        let mut done = hooks.use_state(|| false);

        hooks.use_debounce(move || debounced.set(true), Duration::from_millis(5), ());
        hooks.use_timeout(move || done.set(true), Duration::from_millis(50));

        if done.get() {
            system.exit();
        }

        element! {
            Text(content: format!("debounced: {}", debounced))
        }
    }

    #[apply(test!)]
    async fn test_nothing_scheduled_on_mount() {
        let actual = element!(Quiet)
            .mock_terminal_render_loop(MockTerminalConfig::default())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .await;
        assert_eq!(actual.last().unwrap(), "debounced: false\n");
    }
}
