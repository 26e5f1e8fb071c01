use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use core::time::Duration;

use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use crate::timer::Scheduler;

type TimerKey = (Duration, u64);

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerKey, Box<dyn FnOnce()>>,
}

/// A scheduler driven by an explicit virtual clock.
///
/// Nothing happens until [`advance`](Self::advance) moves time forward; spawned
/// tasks run on a [`LocalPool`] whenever the clock advances or
/// [`run_until_stalled`](Self::run_until_stalled) is called.
///
/// ```
/// use std::{cell::Cell, rc::Rc, time::Duration};
/// use gridsearch_core::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&fired);
/// let _timer = scheduler.set_timeout(Duration::from_millis(250), Box::new(move || flag.set(true)));
///
/// scheduler.advance(Duration::from_millis(249));
/// assert!(!fired.get());
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
    pool: Rc<RefCell<LocalPool>>,
    spawner: LocalSpawner,
}

impl ManualScheduler {
    /// Creates a scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            clock: Rc::new(RefCell::new(Clock::default())),
            pool: Rc::new(RefCell::new(pool)),
            spawner,
        }
    }

    /// Time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of armed, unfired timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Moves the clock forward, firing due timers in deadline order and
    /// running spawned tasks after each one.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let next = clock.timers.first_key_value().map(|(key, _)| *key);
                match next {
                    Some(key) if key.0 <= target => {
                        clock.now = key.0;
                        clock.timers.remove(&key)
                    }
                    _ => None,
                }
            };
            let Some(callback) = due else { break };
            callback();
            self.run_until_stalled();
        }
        self.clock.borrow_mut().now = target;
        self.run_until_stalled();
    }

    /// Polls spawned tasks until none can make progress.
    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending_timers", &self.pending_timers())
            .finish_non_exhaustive()
    }
}

/// Timer handle returned by [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualTimeout {
    key: TimerKey,
    clock: Weak<RefCell<Clock>>,
}

impl Drop for ManualTimeout {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().timers.remove(&self.key);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Timeout = ManualTimeout;

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTimeout {
        let mut clock = self.clock.borrow_mut();
        let key = (clock.now + delay, clock.next_id);
        clock.next_id += 1;
        clock.timers.insert(key, callback);
        ManualTimeout {
            key,
            clock: Rc::downgrade(&self.clock),
        }
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        if let Err(err) = self.spawner.spawn_local(task) {
            tracing::error!(%err, "manual scheduler rejected a task");
        }
    }
}
