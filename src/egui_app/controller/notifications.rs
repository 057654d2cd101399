//! Single-slot toast queue with timed exit and removal.

use std::time::{Duration, Instant};

use super::clock::SharedClock;
use super::deferred::{DeferredQueue, TaskId};
use crate::config::NotificationSettings;
use crate::egui_app::state::{
    Notification, NotificationId, NotificationPhase, NotificationView, Severity,
};

/// Delays applied to every notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTiming {
    /// Insertion to start of the exit transition.
    pub dwell: Duration,
    /// Length of the exit transition; removal follows.
    pub exit: Duration,
    pub entrance: Duration,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self::from(&NotificationSettings::default())
    }
}

impl From<&NotificationSettings> for NotificationTiming {
    fn from(settings: &NotificationSettings) -> Self {
        Self {
            dwell: Duration::from_millis(settings.dwell_ms),
            exit: Duration::from_millis(settings.exit_ms),
            entrance: Duration::from_millis(settings.entrance_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    BeginExit(NotificationId),
    Remove(NotificationId),
}

#[derive(Debug)]
struct Live {
    notification: Notification,
    phase: NotificationPhase,
    exit_task: TaskId,
    remove_task: TaskId,
}

/// Shows at most one notification; a new one evicts the current one.
pub struct NotificationQueue {
    clock: SharedClock,
    timing: NotificationTiming,
    current: Option<Live>,
    steps: DeferredQueue<Step>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(clock: SharedClock, timing: NotificationTiming) -> Self {
        Self {
            clock,
            timing,
            current: None,
            steps: DeferredQueue::default(),
            next_id: 1,
        }
    }

    pub fn timing(&self) -> NotificationTiming {
        self.timing
    }

    /// Replace whatever is showing with a new notification.
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        self.evict_current();
        let now = self.clock.now();
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let notification = Notification {
            id,
            text: text.into(),
            severity,
            created_at: now,
        };
        tracing::debug!(
            "Notification {} ({}): {}",
            id.0,
            severity.as_str(),
            notification.text
        );
        let exit_at = now + self.timing.dwell;
        let exit_task = self.steps.schedule(exit_at, Step::BeginExit(id));
        let remove_task = self.steps.schedule(exit_at + self.timing.exit, Step::Remove(id));
        self.current = Some(Live {
            notification,
            phase: NotificationPhase::Shown,
            exit_task,
            remove_task,
        });
    }

    /// Shorthand for an `Info` notification.
    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(text, Severity::Info);
    }

    /// Run the exit/removal steps that are due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for step in self.steps.take_due(now) {
            self.apply(step, now);
        }
    }

    pub fn visible(&self) -> Option<NotificationView> {
        self.current.as_ref().map(|live| NotificationView {
            notification: live.notification.clone(),
            phase: live.phase,
        })
    }

    /// Instant of the next exit/removal step, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.steps.next_due()
    }

    fn evict_current(&mut self) {
        let Some(live) = self.current.take() else {
            return;
        };
        self.steps.cancel(live.exit_task);
        self.steps.cancel(live.remove_task);
    }

    fn apply(&mut self, step: Step, now: Instant) {
        match step {
            Step::BeginExit(id) => {
                if let Some(live) = self.current.as_mut()
                    && live.notification.id == id
                {
                    live.phase = NotificationPhase::Exiting { since: now };
                }
            }
            Step::Remove(id) => {
                if self
                    .current
                    .as_ref()
                    .is_some_and(|live| live.notification.id == id)
                {
                    self.current = None;
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_steps(&self) -> usize {
        self.steps.len()
    }
}
