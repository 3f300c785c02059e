//! # iocraft-hooks
//!
//! `iocraft-hooks` is a collection of small, reusable hooks for [`iocraft`] components. Each one
//! wraps a common piece of state, such as the terminal size, the mouse position, a persisted
//! value, or a pending timer, so that components can subscribe to it declaratively.
//!
//! ```
//! use iocraft::prelude::*;
//! use iocraft_hooks::prelude::*;
//!
//! #[component]
//! fn Status(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
//!     let size = hooks.use_window_size();
//!     let verbose = hooks.use_toggle(false);
//!
//!     element! {
//!         Text(content: format!("{}x{} (verbose: {})", size.width, size.height, verbose))
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod storage;

pub use storage::*;

/// Hooks for adding behavior to your components.
pub mod hooks;

/// By importing this module, you'll bring all of the crate's hooks and types into scope.
pub mod prelude {
    pub use crate::hooks::*;
    pub use crate::storage::*;
}
