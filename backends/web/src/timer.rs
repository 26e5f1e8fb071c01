use core::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use gridsearch_core::Scheduler;

/// Schedules on the browser event loop: `setTimeout` for timers and the
/// microtask queue for spawned tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timeout = Timeout;

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(timeout_millis(delay), callback)
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// Clamps a delay to what `setTimeout` accepts.
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
