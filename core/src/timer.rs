//! Timers and task spawning.

mod manual;

pub use manual::{ManualScheduler, ManualTimeout};

use core::time::Duration;

use futures::future::LocalBoxFuture;

/// Event-loop services the widget needs from its host.
pub trait Scheduler: Clone + 'static {
    /// Handle to an armed timer. Dropping it cancels the timer if it has not
    /// fired yet; dropping it afterwards is a no-op.
    type Timeout: 'static;

    /// Runs `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Timeout;

    /// Runs `task` to completion on the current thread.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}
