//! This module contains the hooks provided by this crate.
//!
//! Like iocraft's own hooks, they are implemented as traits which extend the
//! [`Hooks`](iocraft::Hooks) object that gets passed to your component. Bring them into scope
//! with `use iocraft_hooks::prelude::*` and call them like any other hook:
//!
//! ```
//! # use iocraft::prelude::*;
//! # use iocraft_hooks::prelude::*;
//! #[component]
//! fn Cursor(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
//!     let position = hooks.use_mouse_position();
//!     element! {
//!         Text(content: format!("pointer at {}, {}", position.x, position.y))
//!     }
//! }
//! ```
//!
//! As with any hook, they must be called in the same order on every render.

mod use_array;
pub use use_array::*;
mod use_debounce;
pub use use_debounce::*;
mod use_keyboard;
pub use use_keyboard::*;
mod use_local_storage;
pub use use_local_storage::*;
mod use_mouse_position;
pub use use_mouse_position::*;
mod use_timeout;
pub use use_timeout::*;
mod use_toggle;
pub use use_toggle::*;
mod use_update_effect;
pub use use_update_effect::*;
mod use_window_size;
pub use use_window_size::*;

pub(crate) mod private {
    pub trait Sealed {}
    impl Sealed for iocraft::Hooks<'_, '_> {}
}

pub(crate) fn hash_deps<D: core::hash::Hash>(deps: D) -> u64 {
    use core::hash::Hasher;
    let mut hasher = std::hash::DefaultHasher::new();
    deps.hash(&mut hasher);
    hasher.finish()
}
