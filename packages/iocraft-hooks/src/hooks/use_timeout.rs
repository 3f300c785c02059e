use crate::hooks::private;
use core::{
    pin::Pin,
    task::{Context, Poll, Waker},
};
use futures::FutureExt;
use iocraft::{Hook, Hooks};
use smol::Timer;
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

/// `UseTimeout` is a hook that invokes a callback once, after a delay.
///
/// The timer starts when the component is first rendered. It is bound to the lifetime of the
/// component: if the component is dropped before the delay elapses, the callback never runs.
///
/// # Example
///
/// ```
/// # use iocraft::prelude::*;
/// # use iocraft_hooks::prelude::*;
/// # use std::time::Duration;
/// #[component]
/// fn Splash(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
///     let mut visible = hooks.use_toggle(true);
///     hooks.use_timeout(move || visible.off(), Duration::from_secs(2));
///
///     element! {
///         Text(content: if visible.get() { "Welcome!" } else { "" })
///     }
/// }
/// ```
pub trait UseTimeout: private::Sealed {
    /// Schedules the given callback to run once the delay has elapsed, and returns a handle which
    /// can be used to cancel or restart the timer.
    ///
    /// The callback is replaced on every render, so the timer always invokes the closure from the
    /// most recent render. If the delay differs from the previous render, the timer restarts with
    /// the new delay.
    fn use_timeout<F>(&mut self, f: F, delay: Duration) -> Timeout
    where
        F: FnMut() + Send + 'static;
}

impl UseTimeout for Hooks<'_, '_> {
    fn use_timeout<F>(&mut self, f: F, delay: Duration) -> Timeout
    where
        F: FnMut() + Send + 'static,
    {
        let hook = self.use_hook(move || UseTimeoutImpl::new(delay));
        hook.callback = Some(Box::new(f));
        if hook.timeout.delay() != delay {
            hook.timeout.set_delay(delay);
        }
        hook.timeout.clone()
    }
}

struct TimeoutState {
    delay: Duration,
    timer: Option<Timer>,
    waker: Option<Waker>,
}

/// A handle to the timer created by [`UseTimeout::use_timeout`].
///
/// Handles are cheap to clone and can be moved into event handlers or futures.
#[derive(Clone)]
pub struct Timeout {
    state: Arc<Mutex<TimeoutState>>,
}

impl Timeout {
    fn new(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(TimeoutState {
                delay,
                timer: Some(Timer::after(delay)),
                waker: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TimeoutState> {
        self.state
            .lock()
            .expect("we should be able to lock the mutex")
    }

    fn set_delay(&self, delay: Duration) {
        self.lock().delay = delay;
        self.reset();
    }

    /// Returns the delay the timer was last armed with.
    pub fn delay(&self) -> Duration {
        self.lock().delay
    }

    /// Returns `true` if the timer is armed and the callback hasn't run yet.
    pub fn is_pending(&self) -> bool {
        self.lock().timer.is_some()
    }

    /// Cancels the timer. The callback won't run unless the timer is [`reset`](Self::reset).
    pub fn clear(&self) {
        self.lock().timer = None;
    }

    /// Cancels the timer and starts it again, so that the callback runs once the full delay has
    /// elapsed from now.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.timer = Some(Timer::after(state.delay));
        if let Some(waker) = state.waker.take() {
            waker.wake();
        }
    }

    fn poll_fire(&self, cx: &mut Context<'_>) -> bool {
        let mut state = self.lock();
        state.waker = Some(cx.waker().clone());
        let fired = state
            .timer
            .as_mut()
            .is_some_and(|timer| timer.poll_unpin(cx).is_ready());
        if fired {
            state.timer = None;
        }
        fired
    }
}

struct UseTimeoutImpl {
    timeout: Timeout,
    callback: Option<Box<dyn FnMut() + Send + 'static>>,
}

impl UseTimeoutImpl {
    fn new(delay: Duration) -> Self {
        Self {
            timeout: Timeout::new(delay),
            callback: None,
        }
    }
}

impl Hook for UseTimeoutImpl {
    fn poll_change(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        // The lock is released before the callback runs so that it may reset the timer.
        if self.timeout.poll_fire(cx) {
            if let Some(callback) = self.callback.as_mut() {
                callback();
            }
        }
        Poll::Pending
    }
}
