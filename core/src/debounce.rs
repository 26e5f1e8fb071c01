//! Last-keystroke-wins input coalescing.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use core::time::Duration;

use crate::timer::Scheduler;

/// Whether a debounced action is waiting to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    /// No timer armed.
    #[default]
    Idle,
    /// A timer is armed and will fire after the quiet period.
    Pending,
}

struct Slot<T> {
    timeout: RefCell<Option<T>>,
    armed: Cell<bool>,
}

/// Holds at most one armed timer; arming a new one cancels the previous.
///
/// A fired timer's handle stays in the slot until the next
/// [`schedule`](Self::schedule) replaces it, so a host timer is never
/// released from inside its own callback.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    slot: Rc<Slot<S::Timeout>>,
}

impl<S: Scheduler> Debouncer<S> {
    /// Creates an idle debouncer.
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            slot: Rc::new(Slot {
                timeout: RefCell::new(None),
                armed: Cell::new(false),
            }),
        }
    }

    /// Quiet period before the action fires.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DebounceState {
        if self.slot.armed.get() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// Cancels any armed timer and arms a new one for `action`.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let slot = Rc::downgrade(&self.slot);
        let timeout = self.scheduler.set_timeout(
            self.delay,
            Box::new(move || {
                if let Some(slot) = slot.upgrade() {
                    slot.armed.set(false);
                }
                action();
            }),
        );
        let previous = self.slot.timeout.replace(Some(timeout));
        self.slot.armed.set(true);
        drop(previous);
    }

    /// Cancels the armed timer, if any.
    #[cfg(test)]
    fn cancel(&self) {
        let previous = self.slot.timeout.take();
        self.slot.armed.set(false);
        drop(previous);
    }
}

impl<S: Scheduler> fmt::Debug for Debouncer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;

    const DELAY: Duration = Duration::from_millis(250);

    fn counting(debouncer: &Debouncer<ManualScheduler>, log: &Rc<RefCell<Vec<u32>>>, value: u32) {
        let log = Rc::clone(log);
        debouncer.schedule(move || log.borrow_mut().push(value));
    }

    #[test]
    fn starts_idle() {
        let debouncer = Debouncer::new(ManualScheduler::new(), DELAY);
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert_eq!(debouncer.delay(), DELAY);
    }

    #[test]
    fn only_the_last_of_a_burst_fires() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let log = Rc::new(RefCell::new(Vec::new()));

        for value in 1..=5 {
            counting(&debouncer, &log, value);
            assert_eq!(debouncer.state(), DebounceState::Pending);
            scheduler.advance(Duration::from_millis(100));
        }
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending_timers(), 1);

        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*log.borrow(), [5]);
        assert_eq!(debouncer.state(), DebounceState::Idle);
    }

    #[test]
    fn separated_inputs_each_fire() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let log = Rc::new(RefCell::new(Vec::new()));

        counting(&debouncer, &log, 1);
        scheduler.advance(DELAY);
        counting(&debouncer, &log, 2);
        scheduler.advance(DELAY);
        assert_eq!(*log.borrow(), [1, 2]);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let scheduler = ManualScheduler::new();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let log = Rc::new(RefCell::new(Vec::new()));

        counting(&debouncer, &log, 1);
        debouncer.cancel();
        assert_eq!(debouncer.state(), DebounceState::Idle);
        scheduler.advance(DELAY * 2);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn independent_debouncers_do_not_interfere() {
        let scheduler = ManualScheduler::new();
        let first = Debouncer::new(scheduler.clone(), DELAY);
        let second = Debouncer::new(scheduler.clone(), Duration::from_millis(100));
        let log = Rc::new(RefCell::new(Vec::new()));

        counting(&first, &log, 1);
        counting(&second, &log, 2);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(*log.borrow(), [2]);
        assert_eq!(first.state(), DebounceState::Pending);
        scheduler.advance(Duration::from_millis(150));
        assert_eq!(*log.borrow(), [2, 1]);
    }
}
