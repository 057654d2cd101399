//! Prediction form: submit gating, example fill, reset, and result display.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::jobs::PredictionJobResult;
use super::notifications::NotificationQueue;
use super::validation::FieldValidator;
use super::{EguiController, UiTask};
use crate::egui_app::state::{
    FieldAccent, FormState, PREDICT_BUSY_LABEL, ResultRegionState, Severity, SubmitButtonState,
};
use crate::wine::{EXAMPLE_RECORD, WineFeature};
use crate::wine_api::{PredictionForm, PredictionReceipt, TransportError};

pub(crate) const MISSING_FIELDS_NOTIFICATION: &str = "Please fill in all fields!";
pub(crate) const EXAMPLE_LOADED_NOTIFICATION: &str =
    "Example data loaded! Click Predict to see the result.";
pub(crate) const RESET_NOTIFICATION: &str = "Form reset successfully!";

/// Whether a submit attempt may reach the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Proceed(PredictionForm),
    Cancelled { invalid: Vec<WineFeature> },
}

/// Gates form submission on field validity.
pub struct FormController;

impl FormController {
    /// Validate every field and either hand back the form or cancel.
    ///
    /// The submit control turns busy first and is restored on cancel.
    pub fn submit(form: &mut FormState, notifications: &mut NotificationQueue) -> SubmitOutcome {
        let previous = std::mem::replace(
            &mut form.submit,
            SubmitButtonState {
                label: PREDICT_BUSY_LABEL.to_string(),
                enabled: false,
                busy: true,
            },
        );
        let mut invalid = Vec::new();
        for field in form.fields.iter_mut() {
            field.valid = FieldValidator::is_valid(&field.value);
            if field.valid {
                field.accent = FieldAccent::Neutral;
            } else {
                field.accent = FieldAccent::Invalid;
                invalid.push(field.feature);
            }
        }
        if !invalid.is_empty() {
            form.submit = previous;
            notifications.notify(MISSING_FIELDS_NOTIFICATION, Severity::Error);
            return SubmitOutcome::Cancelled { invalid };
        }
        SubmitOutcome::Proceed(PredictionForm {
            fields: form
                .fields
                .iter()
                .map(|field| (field.feature, field.value.trim().to_string()))
                .collect(),
        })
    }

    /// Fill the example record and start the highlight flash.
    pub fn fill_example(form: &mut FormState, highlight_until: Instant) {
        for (feature, value) in EXAMPLE_RECORD {
            let field = form.field_mut(feature);
            FieldValidator::on_input(field, value);
            field.highlight_until = Some(highlight_until);
        }
    }

    /// Drop highlights that have run their course.
    pub fn clear_highlights(form: &mut FormState, now: Instant) {
        for field in form.fields.iter_mut() {
            if field.highlight_until.is_some_and(|until| until <= now) {
                field.highlight_until = None;
            }
        }
    }

    /// Clear values and accents and hide the result region.
    pub fn reset(form: &mut FormState, result: &mut ResultRegionState) {
        for field in form.fields.iter_mut() {
            FieldValidator::on_input(field, String::new());
            field.highlight_until = None;
        }
        *result = ResultRegionState::default();
    }

    /// Restore the submit control and show what the server said.
    pub fn finish_submission(
        form: &mut FormState,
        result: &mut ResultRegionState,
        outcome: &Result<PredictionReceipt, TransportError>,
    ) {
        form.submit = SubmitButtonState::default();
        *result = match outcome {
            Ok(receipt) => ResultRegionState {
                visible: true,
                text: format!("Prediction request accepted (HTTP {}).", receipt.status),
                is_error: false,
            },
            Err(err) => ResultRegionState {
                visible: true,
                text: format!("Error: {err}"),
                is_error: true,
            },
        };
    }
}

impl EguiController {
    pub fn set_field_value(&mut self, feature: WineFeature, value: impl Into<String>) {
        FieldValidator::on_input(self.ui.form.field_mut(feature), value);
    }

    pub fn set_field_focus(&mut self, feature: WineFeature, focused: bool) {
        let field = self.ui.form.field_mut(feature);
        if focused {
            FieldValidator::on_focus(field);
        } else {
            FieldValidator::on_blur(field);
        }
    }

    /// Validate the form and post it when every field is filled.
    pub fn submit_prediction(&mut self) -> bool {
        if self.jobs.prediction_in_progress() {
            debug!("Prediction submit ignored while a request is outstanding");
            return false;
        }
        match FormController::submit(&mut self.ui.form, &mut self.notifications) {
            SubmitOutcome::Proceed(form) => {
                let submission = self.jobs.begin_prediction(form);
                info!("Submitting prediction form as request {}", submission.0);
                true
            }
            SubmitOutcome::Cancelled { invalid } => {
                debug!("Prediction submit cancelled; {} field(s) missing", invalid.len());
                false
            }
        }
    }

    pub fn load_example(&mut self) {
        let highlight = Duration::from_millis(self.settings.example_highlight_ms);
        FormController::fill_example(&mut self.ui.form, self.clock.now() + highlight);
        self.schedule(highlight, UiTask::ClearHighlights);
        self.notifications
            .notify(EXAMPLE_LOADED_NOTIFICATION, Severity::Success);
    }

    /// Clear the form; an outstanding prediction is abandoned.
    pub fn reset_form(&mut self) {
        if let Some(submission) = self.jobs.abandon_prediction() {
            debug!("Abandoning prediction {} on form reset", submission.0);
            self.ui.form.submit = SubmitButtonState::default();
        }
        FormController::reset(&mut self.ui.form, &mut self.ui.result);
        self.notifications.info(RESET_NOTIFICATION);
    }

    pub(super) fn handle_prediction_finished(&mut self, message: PredictionJobResult) {
        if !self.jobs.finish_prediction(message.submission) {
            debug!(
                "Dropping result of abandoned prediction {}",
                message.submission.0
            );
            return;
        }
        match &message.result {
            Ok(receipt) => info!(
                "Prediction answered with HTTP {} ({} bytes)",
                receipt.status, receipt.body_bytes
            ),
            Err(err) => warn!("Prediction request failed: {err}"),
        }
        FormController::finish_submission(&mut self.ui.form, &mut self.ui.result, &message.result);
    }
}
