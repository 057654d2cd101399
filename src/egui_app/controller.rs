//! Controller that owns the UI model and bridges it to the wine service.

pub mod clock;
pub mod deferred;
mod form;
pub mod hotkeys;
mod jobs;
mod notifications;
mod status_panel;
mod training;
mod validation;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use form::{FormController, SubmitOutcome};
pub use jobs::Endpoints;
pub use notifications::{NotificationQueue, NotificationTiming};
pub use status_panel::JobStatusPanel;
pub use training::{TrainingController, TriggerOutcome};
pub use validation::FieldValidator;

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::{AppConfig, ConfigError, UiSettings};
use crate::egui_app::state::{Job, NotificationView, Severity, UiState};
use crate::wine_api::{HttpPredictionEndpoint, HttpTrainingEndpoint};
use deferred::DeferredQueue;
use jobs::{ControllerJobs, JobMessage};

/// Deferred work owned by the controller itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UiTask {
    ScrollToForm,
    StartupTip,
    ClearHighlights,
}

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    notifications: NotificationQueue,
    training: TrainingController,
    jobs: ControllerJobs,
    tasks: DeferredQueue<UiTask>,
    clock: SharedClock,
    settings: UiSettings,
}

impl EguiController {
    pub fn new(config: &AppConfig, endpoints: Endpoints, clock: SharedClock) -> Self {
        Self {
            ui: UiState::default(),
            notifications: NotificationQueue::new(
                Arc::clone(&clock),
                NotificationTiming::from(&config.notifications),
            ),
            training: TrainingController::default(),
            jobs: ControllerJobs::new(endpoints),
            tasks: DeferredQueue::default(),
            clock,
            settings: config.ui.clone(),
        }
    }

    /// Build a controller that talks HTTP to the configured server.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let endpoints = Endpoints {
            training: Arc::new(HttpTrainingEndpoint::new(&config.server)?),
            prediction: Arc::new(HttpPredictionEndpoint::new(&config.server)?),
        };
        Ok(Self::new(config, endpoints, Arc::new(SystemClock)))
    }

    /// Queue the startup tip if it is enabled.
    pub fn schedule_startup_tip(&mut self) {
        if self.settings.startup_tip {
            let delay = Duration::from_millis(self.settings.startup_tip_delay_ms);
            self.schedule(delay, UiTask::StartupTip);
        }
    }

    /// Apply finished jobs and due deferred work. Call once per frame.
    pub fn poll(&mut self) {
        self.poll_jobs();
        let now = self.clock.now();
        for task in self.tasks.take_due(now) {
            self.run_task(task, now);
        }
        self.notifications.tick();
    }

    /// Earliest instant at which [`poll`](Self::poll) has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tasks.next_due(), self.notifications.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while a worker thread may still post a result.
    pub fn has_outstanding_requests(&self) -> bool {
        self.training.pending_job().is_some() || self.jobs.prediction_in_progress()
    }

    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        self.notifications.notify(text, severity);
    }

    pub fn notification(&self) -> Option<NotificationView> {
        self.notifications.visible()
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        self.notifications.timing()
    }

    pub fn training_job(&self) -> &Job {
        self.training.job()
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Consume the one-shot scroll request raised after training succeeds.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.ui.scroll_to_form_requested)
    }

    pub(crate) fn handle_hotkey(&mut self, action: hotkeys::HotkeyAction) {
        info!("Hotkey: {}", action.id);
        match action.command() {
            hotkeys::HotkeyCommand::StartTraining => {
                self.start_training();
            }
            hotkeys::HotkeyCommand::LoadExample => self.load_example(),
            hotkeys::HotkeyCommand::ResetForm => self.reset_form(),
        }
    }

    fn schedule(&mut self, delay: Duration, task: UiTask) {
        let due = self.clock.now() + delay;
        self.tasks.schedule(due, task);
    }

    fn poll_jobs(&mut self) {
        loop {
            match self.jobs.try_recv_message() {
                Ok(message) => self.handle_job_message(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_job_message(&mut self, message: JobMessage) {
        match message {
            JobMessage::Trained(result) => self.handle_training_finished(result),
            JobMessage::Predicted(result) => self.handle_prediction_finished(result),
        }
    }

    fn run_task(&mut self, task: UiTask, now: Instant) {
        match task {
            UiTask::ScrollToForm => self.ui.scroll_to_form_requested = true,
            UiTask::StartupTip => {
                let tip = format!(
                    "Tip: Train model first (Step 1), then make predictions! Press {}+T to train.",
                    hotkeys::command_label()
                );
                self.notifications.info(tip);
            }
            UiTask::ClearHighlights => FormController::clear_highlights(&mut self.ui.form, now),
        }
    }

    /// Block until a worker posts a result, then apply it.
    #[cfg(test)]
    pub(crate) fn wait_for_job(&mut self, timeout: Duration) -> bool {
        match self.jobs.recv_message_timeout(timeout) {
            Some(message) => {
                self.handle_job_message(message);
                true
            }
            None => false,
        }
    }
}
