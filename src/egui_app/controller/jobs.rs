use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::egui_app::state::JobId;
use crate::wine_api::{
    PredictionEndpoint, PredictionForm, PredictionReceipt, TrainResponse, TrainingEndpoint,
    TransportError,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

/// Results posted back to the UI thread by worker threads.
#[derive(Debug)]
pub(crate) enum JobMessage {
    Trained(TrainingJobResult),
    Predicted(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct TrainingJobResult {
    pub(crate) job_id: JobId,
    pub(crate) result: Result<TrainResponse, TransportError>,
}

/// Sequence number of a dispatched prediction request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SubmissionId(pub(crate) u64);

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) submission: SubmissionId,
    pub(crate) result: Result<PredictionReceipt, TransportError>,
}

/// The remote collaborators the controller talks to.
#[derive(Clone)]
pub struct Endpoints {
    pub training: Arc<dyn TrainingEndpoint>,
    pub prediction: Arc<dyn PredictionEndpoint>,
}

/// Spawns the blocking requests and funnels their results into one channel.
pub(crate) struct ControllerJobs {
    endpoints: Endpoints,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pending_prediction: Option<SubmissionId>,
    next_submission: u64,
}

impl ControllerJobs {
    pub(crate) fn new(endpoints: Endpoints) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            endpoints,
            message_tx,
            message_rx,
            pending_prediction: None,
            next_submission: 1,
        }
    }

    pub(crate) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    /// Run one training request off the UI thread.
    pub(crate) fn begin_training(&self, job_id: JobId) {
        let endpoint = Arc::clone(&self.endpoints.training);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = endpoint.train();
            let _ = tx.send(JobMessage::Trained(TrainingJobResult { job_id, result }));
        });
    }

    pub(crate) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(crate) fn begin_prediction(&mut self, form: PredictionForm) -> SubmissionId {
        let submission = SubmissionId(self.next_submission);
        self.next_submission += 1;
        self.pending_prediction = Some(submission);
        let endpoint = Arc::clone(&self.endpoints.prediction);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = endpoint.submit(&form);
            let _ = tx.send(JobMessage::Predicted(PredictionJobResult { submission, result }));
        });
        submission
    }

    /// Forget the outstanding prediction; its result will be dropped on arrival.
    pub(crate) fn abandon_prediction(&mut self) -> Option<SubmissionId> {
        self.pending_prediction.take()
    }

    /// Clear the pending prediction if `submission` is it.
    ///
    /// Returns false for results of abandoned submissions.
    pub(crate) fn finish_prediction(&mut self, submission: SubmissionId) -> bool {
        if self.pending_prediction == Some(submission) {
            self.pending_prediction = None;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub(crate) fn recv_message_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Option<JobMessage> {
        self.message_rx.recv_timeout(timeout).ok()
    }
}
