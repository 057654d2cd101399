use url::Url;

use super::TransportError;
use crate::config::{ConfigError, ServerSettings};
use crate::http_client::{self, MAX_RESPONSE_BYTES};
use crate::wine::WineFeature;

/// Validated form values in submission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionForm {
    pub fields: Vec<(WineFeature, String)>,
}

impl PredictionForm {
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.fields
            .iter()
            .map(|(feature, value)| (feature.key(), value.as_str()))
            .collect()
    }
}

/// What the server said about an accepted form post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionReceipt {
    pub status: u16,
    pub body_bytes: usize,
}

/// Posts the prediction form and waits for the server to answer.
pub trait PredictionEndpoint: Send + Sync {
    fn submit(&self, form: &PredictionForm) -> Result<PredictionReceipt, TransportError>;
}

/// `POST {base_url}{predict_path}` as `application/x-www-form-urlencoded`.
pub struct HttpPredictionEndpoint {
    agent: ureq::Agent,
    url: Url,
}

impl HttpPredictionEndpoint {
    pub fn new(settings: &ServerSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            agent: http_client::agent(settings.connect_timeout(), settings.predict_timeout()),
            url: settings.predict_url()?,
        })
    }
}

impl PredictionEndpoint for HttpPredictionEndpoint {
    fn submit(&self, form: &PredictionForm) -> Result<PredictionReceipt, TransportError> {
        let response = match self.agent.post(self.url.as_str()).send_form(&form.pairs()) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)?;
                return Err(TransportError::Status {
                    code,
                    body: http_client::body_excerpt(&bytes),
                });
            }
            Err(ureq::Error::Transport(err)) => return Err(err.into()),
        };
        let status = response.status();
        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)?;
        Ok(PredictionReceipt {
            status,
            body_bytes: bytes.len(),
        })
    }
}
