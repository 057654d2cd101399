//! Deferred UI actions polled once per frame.
//!
//! The egui loop has no timers of its own: callers schedule an action for an
//! instant, poll with the current time, and ask for a repaint at
//! [`DeferredQueue::next_due`].

use std::time::Instant;

/// Handle used to cancel a scheduled action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<A> {
    id: TaskId,
    due: Instant,
    action: A,
}

/// Actions waiting for their due instant, fired in due order.
#[derive(Debug)]
pub struct DeferredQueue<A> {
    tasks: Vec<Scheduled<A>>,
    next_id: u64,
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl<A> DeferredQueue<A> {
    pub fn schedule(&mut self, due: Instant, action: A) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Scheduled { id, due, action });
        id
    }

    /// Drop a pending action. Returns false when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Remove and return every action due at `now`, earliest first.
    ///
    /// Ties keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due, task.id.0));
        due.into_iter().map(|task| task.action).collect()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|task| task.due).min()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
