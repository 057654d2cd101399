//! Training trigger: one in-flight job, rendered through the status panel.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::jobs::TrainingJobResult;
use super::status_panel::JobStatusPanel;
use super::{EguiController, UiTask};
use crate::egui_app::state::{Job, JobId, JobState, Severity, TriggerState};
use crate::wine_api::{TrainResponse, TransportError};

pub(crate) const PENDING_MESSAGE: &str = "Training in progress...";
pub(crate) const PENDING_DETAILS: &str =
    "Please wait, this may take a few minutes (typically 2-5 minutes)";
pub(crate) const TRANSPORT_FAILURE_MESSAGE: &str = "Training Failed";
pub(crate) const SUCCESS_NOTIFICATION: &str =
    "Model trained successfully! You can now make predictions.";
pub(crate) const NETWORK_ERROR_NOTIFICATION: &str =
    "Network error. Please check your connection and try again.";
const FALLBACK_FAILURE_MESSAGE: &str = "Training failed.";

/// Result of asking for a new training run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    Started(JobId),
    /// A job is already pending; nothing was dispatched.
    IgnoredWhilePending,
    /// The model is trained; the trigger stays terminal.
    AlreadyComplete,
}

/// How a finished request resolved the job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Succeeded,
    Rejected { message: String },
    TransportFailed { error: String },
}

/// Owns the training [`Job`] and the at-most-one-pending guard.
#[derive(Debug)]
pub struct TrainingController {
    job: Job,
    pending: Option<JobId>,
    next_job_id: u64,
}

impl Default for TrainingController {
    fn default() -> Self {
        Self {
            job: Job::idle(),
            pending: None,
            next_job_id: 1,
        }
    }
}

impl TrainingController {
    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn pending_job(&self) -> Option<JobId> {
        self.pending
    }

    /// Check the guard and move to `Pending`, handing out the id to dispatch.
    pub(crate) fn begin(&mut self) -> Result<JobId, TriggerOutcome> {
        match self.job.state {
            JobState::Pending => return Err(TriggerOutcome::IgnoredWhilePending),
            JobState::Succeeded => return Err(TriggerOutcome::AlreadyComplete),
            JobState::Idle | JobState::Failed => {}
        }
        let id = JobId(self.next_job_id);
        self.next_job_id += 1;
        self.job = Job::pending(PENDING_MESSAGE, PENDING_DETAILS);
        self.pending = Some(id);
        Ok(id)
    }

    /// Apply the outcome of the pending request.
    ///
    /// Returns `None` when `job_id` is not the pending job.
    pub(crate) fn resolve(
        &mut self,
        job_id: JobId,
        result: Result<TrainResponse, TransportError>,
    ) -> Option<Resolution> {
        if self.pending != Some(job_id) {
            return None;
        }
        self.pending = None;
        let resolution = match result {
            Ok(response) if response.is_success() => {
                self.job = Job::succeeded(response.message, response.details);
                Resolution::Succeeded
            }
            Ok(response) => {
                let message = response.message.clone();
                self.job = Job::failed(response.message, response.details);
                Resolution::Rejected { message }
            }
            Err(err) => {
                let error = err.to_string();
                self.job = Job::failed(TRANSPORT_FAILURE_MESSAGE, format!("Error: {error}"));
                Resolution::TransportFailed { error }
            }
        };
        Some(resolution)
    }
}

fn rejection_notice(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        format!("{FALLBACK_FAILURE_MESSAGE} Please try again.")
    } else {
        format!("{message} Please try again.")
    }
}

impl EguiController {
    /// Start a training run unless one is pending or already succeeded.
    pub fn start_training(&mut self) -> TriggerOutcome {
        let job_id = match self.training.begin() {
            Ok(job_id) => job_id,
            Err(outcome) => {
                debug!("Training trigger ignored: {outcome:?}");
                return outcome;
            }
        };
        JobStatusPanel::render(&mut self.ui.training.status, self.training.job());
        self.ui.training.trigger = TriggerState::busy();
        info!("Dispatching training job {}", job_id.0);
        self.jobs.begin_training(job_id);
        TriggerOutcome::Started(job_id)
    }

    pub(super) fn handle_training_finished(&mut self, message: TrainingJobResult) {
        let job_id = message.job_id;
        let Some(resolution) = self.training.resolve(job_id, message.result) else {
            warn!("Dropping result for training job {} that is not pending", job_id.0);
            return;
        };
        JobStatusPanel::render(&mut self.ui.training.status, self.training.job());
        match resolution {
            Resolution::Succeeded => {
                info!("Training job {} succeeded", job_id.0);
                self.ui.training.trigger = TriggerState::complete();
                self.notifications
                    .notify(SUCCESS_NOTIFICATION, Severity::Success);
                let delay = Duration::from_millis(self.settings.scroll_delay_ms);
                self.schedule(delay, UiTask::ScrollToForm);
            }
            Resolution::Rejected { message } => {
                warn!("Training job {} rejected: {message}", job_id.0);
                self.ui.training.trigger = TriggerState::ready();
                self.notifications
                    .notify(rejection_notice(&message), Severity::Error);
            }
            Resolution::TransportFailed { error } => {
                warn!("Training job {} failed: {error}", job_id.0);
                self.ui.training.trigger = TriggerState::ready();
                self.notifications
                    .notify(NETWORK_ERROR_NOTIFICATION, Severity::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: &str, message: &str, details: &str) -> TrainResponse {
        TrainResponse {
            status: status.to_string(),
            message: message.to_string(),
            details: details.to_string(),
        }
    }

    #[test]
    fn second_begin_while_pending_is_refused() {
        let mut training = TrainingController::default();
        let first = training.begin().unwrap();
        assert_eq!(
            training.begin().unwrap_err(),
            TriggerOutcome::IgnoredWhilePending
        );
        assert_eq!(training.pending_job(), Some(first));
        assert!(training.job().is_pending());
    }

    #[test]
    fn success_is_terminal() {
        let mut training = TrainingController::default();
        let id = training.begin().unwrap();
        let resolution = training.resolve(id, Ok(response("success", "Trained", "R2 0.41")));
        assert_eq!(resolution, Some(Resolution::Succeeded));
        assert_eq!(training.job().message, "Trained");
        assert_eq!(training.job().details, "R2 0.41");
        assert_eq!(
            training.begin().unwrap_err(),
            TriggerOutcome::AlreadyComplete
        );
    }

    #[test]
    fn failure_allows_a_new_attempt_with_a_fresh_id() {
        let mut training = TrainingController::default();
        let first = training.begin().unwrap();
        training.resolve(first, Ok(response("error", "Dataset missing", "")));
        assert_eq!(training.job().state, JobState::Failed);

        let second = training.begin().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn stale_result_is_ignored() {
        let mut training = TrainingController::default();
        let first = training.begin().unwrap();
        training.resolve(first, Err(TransportError::Network("reset".into())));
        let second = training.begin().unwrap();

        let stale = training.resolve(first, Ok(response("success", "late", "")));
        assert_eq!(stale, None);
        assert_eq!(training.pending_job(), Some(second));
    }

    #[test]
    fn transport_failure_records_the_error_text() {
        let mut training = TrainingController::default();
        let id = training.begin().unwrap();
        let resolution = training.resolve(
            id,
            Err(TransportError::Status {
                code: 502,
                body: "bad gateway".into(),
            }),
        );
        assert_eq!(
            resolution,
            Some(Resolution::TransportFailed {
                error: "HTTP 502: bad gateway".into()
            })
        );
        assert_eq!(training.job().message, TRANSPORT_FAILURE_MESSAGE);
        assert_eq!(training.job().details, "Error: HTTP 502: bad gateway");
    }

    #[test]
    fn rejection_notice_falls_back_when_message_is_blank() {
        assert_eq!(
            rejection_notice("Dataset missing."),
            "Dataset missing. Please try again."
        );
        assert_eq!(rejection_notice("  "), "Training failed. Please try again.");
    }
}
