// ============================================================================
// DEBOUNCE - Coalesce bursts of input into one deferred action
// ============================================================================

use std::cell::RefCell;

use gloo_timers::callback::Timeout;

/// Something that can run a task later. Dropping the returned handle must
/// cancel the task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers (`setTimeout` through gloo)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Runs only the last action of a burst, `delay_ms` after the last call.
pub struct Debouncer<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedules `action`, replacing (and so cancelling) whatever was pending.
    pub fn call<F: FnOnce() + 'static>(&self, action: F) {
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(action));
        // Dropping the previous handle cancels its timer
        self.pending.borrow_mut().replace(handle);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Debouncer<BrowserScheduler> {
    pub fn browser(delay_ms: u32) -> Self {
        Self::new(BrowserScheduler, delay_ms)
    }
}

#[cfg(test)]
pub mod testing {
    //! Virtual-time scheduler for driving debounced code in unit tests.

    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        id: u64,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        id: u64,
        clock: Rc<RefCell<Clock>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.clock.borrow_mut().tasks.retain(|t| t.id != self.id);
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        /// Moves virtual time forward, firing every task that comes due.
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let task = clock.tasks.remove(i);
                        clock.now = task.due;
                        task
                    })
                };
                match next {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut clock = self.clock.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + u64::from(delay_ms);
            clock.tasks.push(Task { id, due, run: task });
            ManualHandle {
                id,
                clock: self.clock.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn burst_of_keystrokes_fires_once_after_last() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 1000);
        let fired: Rc<RefCell<Vec<(u64, String)>>> = Rc::default();

        for (i, text) in ["P", "Pa", "Par"].iter().enumerate() {
            if i > 0 {
                clock.advance(200);
            }
            let fired = fired.clone();
            let clock_at = clock.clone();
            let text = text.to_string();
            debouncer.call(move || fired.borrow_mut().push((clock_at.now(), text)));
        }

        // Last keystroke at t=400; nothing before t=1400
        clock.advance(999);
        assert!(fired.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*fired.borrow(), vec![(1400, "Par".to_string())]);

        clock.advance(5000);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn pauses_longer_than_delay_fire_each_time() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 1000);
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let count = count.clone();
            debouncer.call(move || *count.borrow_mut() += 1);
            clock.advance(1500);
        }
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn cancel_drops_pending_action() {
        let clock = ManualScheduler::default();
        let debouncer = Debouncer::new(clock.clone(), 1000);
        let count = Rc::new(RefCell::new(0));

        let c = count.clone();
        debouncer.call(move || *c.borrow_mut() += 1);
        assert_eq!(clock.pending(), 1);
        debouncer.cancel();
        assert_eq!(clock.pending(), 0);

        clock.advance(2000);
        assert_eq!(*count.borrow(), 0);
    }
}
