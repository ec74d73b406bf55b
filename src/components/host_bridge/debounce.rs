// Trailing debounce over a swappable timer source.

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// One-shot timer source. Dropping the returned handle cancels the timer.
pub trait Clock {
    type Pending;

    fn schedule(&self, delay_ms: u32, job: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Collapses a burst of triggers into one deferred action.
///
/// Holds at most one pending timer; every call cancels the previous one, so
/// the action runs once, `settle_ms` after the burst goes quiet.
pub struct Debouncer<C: Clock> {
    clock: C,
    settle_ms: u32,
    pending: Option<C::Pending>,
}

impl<C: Clock> Debouncer<C> {
    pub fn new(clock: C, settle_ms: u32) -> Self {
        Self {
            clock,
            settle_ms,
            pending: None,
        }
    }

    /// Schedule `job` to run after the settle delay, cancelling whatever was
    /// scheduled before it.
    pub fn call(&mut self, job: impl FnOnce() + 'static) {
        self.pending.take();
        self.pending = Some(self.clock.schedule(self.settle_ms, Box::new(job)));
    }
}

/// Browser timer source; the handle clears the underlying timeout on drop.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    type Pending = Timeout;

    fn schedule(&self, delay_ms: u32, job: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, job)
    }
}
