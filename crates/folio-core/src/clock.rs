//! Deterministic [`Scheduler`] for driving timer-based code without a browser.
//!
//! Time only moves when [`VirtualClock::advance`] or
//! [`VirtualClock::fire_next`] is called.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::typing::Scheduler;

struct Entry {
    id: u64,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Timeline {
    now: u64,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Manually advanced clock. Clones share the same timeline.
#[derive(Clone, Default)]
pub struct VirtualClock {
    timeline: Rc<RefCell<Timeline>>,
}

/// Cancels its callback when dropped.
pub struct VirtualTimeout {
    id: u64,
    timeline: Weak<RefCell<Timeline>>,
}

impl Drop for VirtualTimeout {
    fn drop(&mut self) {
        if let Some(timeline) = self.timeline.upgrade() {
            timeline.borrow_mut().queue.retain(|e| e.id != self.id);
        }
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since creation.
    pub fn now(&self) -> u64 {
        self.timeline.borrow().now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending(&self) -> usize {
        self.timeline.borrow().queue.len()
    }

    /// Time until the earliest pending callback.
    pub fn next_delay(&self) -> Option<u64> {
        let timeline = self.timeline.borrow();
        timeline
            .queue
            .iter()
            .map(|e| e.due - timeline.now)
            .min()
    }

    /// Jumps to the earliest pending callback and runs it.
    ///
    /// Returns how far the clock moved, or `None` when nothing is pending.
    pub fn fire_next(&self) -> Option<u64> {
        let (entry, waited) = {
            let mut timeline = self.timeline.borrow_mut();
            let position = timeline
                .queue
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| (e.due, e.id))
                .map(|(i, _)| i)?;
            let entry = timeline.queue.remove(position);
            let waited = entry.due - timeline.now;
            timeline.now = entry.due;
            (entry, waited)
        };
        // The borrow is released so the callback can schedule again.
        (entry.callback)();
        Some(waited)
    }

    /// Moves time forward by `ms`, running every callback that falls due.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        while self.next_delay().is_some_and(|d| self.now() + d <= target) {
            self.fire_next();
        }
        self.timeline.borrow_mut().now = target;
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualTimeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> VirtualTimeout {
        let mut timeline = self.timeline.borrow_mut();
        let id = timeline.next_id;
        timeline.next_id += 1;
        let due = timeline.now + u64::from(delay_ms);
        timeline.queue.push(Entry { id, due, callback });

        VirtualTimeout {
            id,
            timeline: Rc::downgrade(&self.timeline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let clock = VirtualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        let _late = clock.schedule(30, Box::new(move || l.borrow_mut().push("late")));
        let l = log.clone();
        let _early = clock.schedule(10, Box::new(move || l.borrow_mut().push("early")));

        clock.advance(100);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(clock.now(), 100);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let clock = VirtualClock::new();
        let fired = Rc::new(RefCell::new(false));

        let f = fired.clone();
        let handle = clock.schedule(5, Box::new(move || *f.borrow_mut() = true));
        drop(handle);

        assert_eq!(clock.pending(), 0);
        clock.advance(10);
        assert!(!*fired.borrow());
    }

    #[test]
    fn test_fire_next_reports_wait() {
        let clock = VirtualClock::new();
        let _h = clock.schedule(42, Box::new(|| {}));
        assert_eq!(clock.fire_next(), Some(42));
        assert_eq!(clock.fire_next(), None);
    }
}
