use crate::hooks::{hash_deps, private};
use core::hash::Hash;
use iocraft::{ComponentUpdater, Hook, Hooks};

/// `UseUpdateEffect` is a hook that allows you to execute a function after an update pass in
/// which a dependency changed, skipping the component's first render.
///
/// This is useful for reacting to changes in props or state without also reacting to their
/// initial values.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// #[derive(Default, Props)]
/// struct ScoreProps {
///     score: u32,
/// }
///
/// #[component]
/// fn Score(mut hooks: Hooks, props: &ScoreProps) -> impl Into<AnyElement<'static>> {
///     let mut changes = hooks.use_state(|| 0);
///     hooks.use_update_effect(move || changes += 1, props.score);
///
///     element! {
///         Text(content: format!("score: {} (changed {} times)", props.score, changes))
///     }
/// }
/// ```
pub trait UseUpdateEffect: private::Sealed {
    /// Executes the given function after the update pass, if the dependency argument has changed
    /// since the previous render. The function is never executed after the first render.
    ///
    /// Changes to the dependencies are detected solely via the [`Hash`](std::hash::Hash) trait, so
    /// this function will hash them but not store them.
    ///
    /// To provide multiple dependencies, place your dependencies in a tuple.
    fn use_update_effect<F, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() + Send + Unpin + 'static,
        D: Hash;
}

impl UseUpdateEffect for Hooks<'_, '_> {
    fn use_update_effect<F, D>(&mut self, f: F, deps: D)
    where
        F: FnOnce() + Send + Unpin + 'static,
        D: Hash,
    {
        let deps_hash = hash_deps(deps);
        let hook = self.use_hook(UseUpdateEffectImpl::<F>::default);
        hook.f = match hook.deps_hash {
            Some(prev) if prev != deps_hash => Some(f),
            _ => None,
        };
        hook.deps_hash = Some(deps_hash);
    }
}

struct UseUpdateEffectImpl<F> {
    deps_hash: Option<u64>,
    f: Option<F>,
}

impl<F> Default for UseUpdateEffectImpl<F> {
    fn default() -> Self {
        Self {
            deps_hash: None,
            f: None,
        }
    }
}

impl<F: FnOnce() + Send + Unpin> Hook for UseUpdateEffectImpl<F> {
    fn post_component_update(&mut self, _updater: &mut ComponentUpdater) {
        if let Some(f) = self.f.take() {
            f();
        }
    }
}
