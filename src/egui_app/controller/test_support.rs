use super::*;
use crate::wine_api::{
    PredictionEndpoint, PredictionForm, PredictionReceipt, TrainResponse, TrainingEndpoint,
    TransportError,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};

pub(super) type TrainOutcome = Result<TrainResponse, TransportError>;
pub(super) type PredictOutcome = Result<PredictionReceipt, TransportError>;

const JOB_TIMEOUT: Duration = Duration::from_secs(5);

/// Training endpoint that blocks until the test releases an outcome.
pub(super) struct GatedTraining {
    outcomes: Mutex<Receiver<TrainOutcome>>,
    calls: AtomicUsize,
}

impl TrainingEndpoint for GatedTraining {
    fn train(&self) -> Result<TrainResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcomes = self.outcomes.lock().unwrap();
        outcomes
            .recv()
            .unwrap_or_else(|_| Err(TransportError::Network("gate closed".into())))
    }
}

impl GatedTraining {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Prediction endpoint that records forms and blocks like [`GatedTraining`].
pub(super) struct GatedPrediction {
    outcomes: Mutex<Receiver<PredictOutcome>>,
    submitted: Mutex<Vec<PredictionForm>>,
}

impl PredictionEndpoint for GatedPrediction {
    fn submit(&self, form: &PredictionForm) -> Result<PredictionReceipt, TransportError> {
        self.submitted.lock().unwrap().push(form.clone());
        let outcomes = self.outcomes.lock().unwrap();
        outcomes
            .recv()
            .unwrap_or_else(|_| Err(TransportError::Network("gate closed".into())))
    }
}

impl GatedPrediction {
    pub(super) fn submitted(&self) -> Vec<PredictionForm> {
        self.submitted.lock().unwrap().clone()
    }
}

pub(super) struct Harness {
    pub(super) controller: EguiController,
    pub(super) clock: Arc<ManualClock>,
    pub(super) training: Arc<GatedTraining>,
    pub(super) prediction: Arc<GatedPrediction>,
    train_tx: Sender<TrainOutcome>,
    predict_tx: Sender<PredictOutcome>,
}

pub(super) fn harness() -> Harness {
    harness_with(AppConfig::default())
}

pub(super) fn harness_with(config: AppConfig) -> Harness {
    let (train_tx, train_rx) = channel();
    let (predict_tx, predict_rx) = channel();
    let training = Arc::new(GatedTraining {
        outcomes: Mutex::new(train_rx),
        calls: AtomicUsize::new(0),
    });
    let prediction = Arc::new(GatedPrediction {
        outcomes: Mutex::new(predict_rx),
        submitted: Mutex::new(Vec::new()),
    });
    let clock = ManualClock::new();
    let endpoints = Endpoints {
        training: training.clone(),
        prediction: prediction.clone(),
    };
    let controller = EguiController::new(&config, endpoints, clock.clone());
    Harness {
        controller,
        clock,
        training,
        prediction,
        train_tx,
        predict_tx,
    }
}

impl Harness {
    /// Release the blocked training request and apply its result.
    pub(super) fn finish_training(&mut self, outcome: TrainOutcome) {
        self.train_tx.send(outcome).unwrap();
        assert!(self.controller.wait_for_job(JOB_TIMEOUT), "training result never arrived");
    }

    pub(super) fn finish_prediction(&mut self, outcome: PredictOutcome) {
        self.predict_tx.send(outcome).unwrap();
        assert!(self.controller.wait_for_job(JOB_TIMEOUT), "prediction result never arrived");
    }

    /// Move the clock forward and run one frame's worth of polling.
    pub(super) fn advance_ms(&mut self, ms: u64) {
        self.clock.advance(Duration::from_millis(ms));
        self.controller.poll();
    }

    pub(super) fn notification_text(&self) -> Option<String> {
        self.controller
            .notification()
            .map(|view| view.notification.text)
    }
}

pub(super) fn train_response(status: &str, message: &str, details: &str) -> TrainResponse {
    TrainResponse {
        status: status.to_string(),
        message: message.to_string(),
        details: details.to_string(),
    }
}
