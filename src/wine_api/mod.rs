//! Client side of the wine-quality service: training trigger and prediction form post.

mod prediction;
mod training;

pub use prediction::{HttpPredictionEndpoint, PredictionEndpoint, PredictionForm, PredictionReceipt};
pub use training::{HttpTrainingEndpoint, TrainResponse, TrainingEndpoint};

/// Failure to obtain a usable response from the service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status and no usable body.
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Read(#[from] std::io::Error),
    /// The response body was not the expected JSON document.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<ureq::Transport> for TransportError {
    fn from(err: ureq::Transport) -> Self {
        Self::Network(err.to_string())
    }
}
