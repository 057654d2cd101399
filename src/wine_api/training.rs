use serde::{Deserialize, Serialize};
use url::Url;

use super::TransportError;
use crate::config::{ConfigError, ErrorBodyPolicy, ServerSettings};
use crate::http_client::{self, MAX_RESPONSE_BYTES};

const SUCCESS_STATUS: &str = "success";

/// Body returned by the training endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: String,
}

impl TrainResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Starts one training run and blocks until the server answers.
pub trait TrainingEndpoint: Send + Sync {
    fn train(&self) -> Result<TrainResponse, TransportError>;
}

/// `POST {base_url}{train_path}` over HTTP.
pub struct HttpTrainingEndpoint {
    agent: ureq::Agent,
    url: Url,
    error_bodies: ErrorBodyPolicy,
}

impl HttpTrainingEndpoint {
    pub fn new(settings: &ServerSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            agent: http_client::agent(settings.connect_timeout(), settings.train_timeout()),
            url: settings.train_url()?,
            error_bodies: settings.error_bodies,
        })
    }
}

impl TrainingEndpoint for HttpTrainingEndpoint {
    fn train(&self) -> Result<TrainResponse, TransportError> {
        let request = self
            .agent
            .post(self.url.as_str())
            .set("Content-Type", "application/json");
        let (code, response) = match request.call() {
            Ok(response) => (response.status(), response),
            Err(ureq::Error::Status(code, response)) => (code, response),
            Err(ureq::Error::Transport(err)) => return Err(err.into()),
        };
        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)?;
        interpret(code, &bytes, self.error_bodies)
    }
}

fn interpret(
    code: u16,
    bytes: &[u8],
    error_bodies: ErrorBodyPolicy,
) -> Result<TrainResponse, TransportError> {
    let parsed = serde_json::from_slice::<TrainResponse>(bytes);
    if (200..300).contains(&code) {
        return parsed.map_err(|err| TransportError::Malformed(err.to_string()));
    }
    match (error_bodies, parsed) {
        (ErrorBodyPolicy::Logical, Ok(body)) if !body.is_success() => {
            tracing::debug!("Training endpoint answered HTTP {code} with a failure body");
            Ok(body)
        }
        _ => Err(TransportError::Status {
            code,
            body: http_client::body_excerpt(bytes),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{closed_port_url, json_response, serve_once};

    fn endpoint_for(base_url: String, error_bodies: ErrorBodyPolicy) -> HttpTrainingEndpoint {
        HttpTrainingEndpoint::new(&ServerSettings {
            base_url,
            connect_timeout_secs: 2,
            train_timeout_secs: 5,
            error_bodies,
            ..ServerSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn posts_json_request_to_train_path() {
        let body = r#"{"status":"success","message":"Model training completed successfully!","details":"You can now make predictions."}"#;
        let (url, requests) = serve_once(json_response("200 OK", body));

        let response = endpoint_for(url, ErrorBodyPolicy::Logical).train().unwrap();

        assert!(response.is_success());
        assert_eq!(response.message, "Model training completed successfully!");
        assert_eq!(response.details, "You can now make predictions.");
        let request = requests.recv().unwrap();
        assert!(request.starts_with("POST /train HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    }

    #[test]
    fn server_error_with_failure_body_is_a_logical_failure() {
        let body = r#"{"status":"error","message":"Training failed","details":"Traceback"}"#;
        let (url, _) = serve_once(json_response("500 INTERNAL SERVER ERROR", body));

        let response = endpoint_for(url, ErrorBodyPolicy::Logical).train().unwrap();

        assert!(!response.is_success());
        assert_eq!(response.details, "Traceback");
    }

    #[test]
    fn transport_policy_turns_error_status_into_transport_failure() {
        let body = r#"{"status":"error","message":"Training failed","details":"Traceback"}"#;
        let (url, _) = serve_once(json_response("500 INTERNAL SERVER ERROR", body));

        let err = endpoint_for(url, ErrorBodyPolicy::Transport)
            .train()
            .unwrap_err();

        assert!(matches!(err, TransportError::Status { code: 500, .. }));
    }

    #[test]
    fn malformed_success_body_is_a_transport_failure() {
        let (url, _) = serve_once(json_response("200 OK", "<html>oops</html>"));

        let err = endpoint_for(url, ErrorBodyPolicy::Logical)
            .train()
            .unwrap_err();

        assert!(matches!(err, TransportError::Malformed(_)));
    }

    #[test]
    fn refused_connection_is_a_network_failure() {
        let err = endpoint_for(closed_port_url(), ErrorBodyPolicy::Logical)
            .train()
            .unwrap_err();

        assert!(matches!(err, TransportError::Network(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn error_status_claiming_success_is_not_trusted() {
        let body = br#"{"status":"success","message":"?","details":"?"}"#;
        let err = interpret(502, body, ErrorBodyPolicy::Logical).unwrap_err();
        assert!(matches!(err, TransportError::Status { code: 502, .. }));
    }

    #[test]
    fn missing_message_fields_default_to_empty() {
        let response = interpret(200, br#"{"status":"error"}"#, ErrorBodyPolicy::Logical).unwrap();
        assert_eq!(response.message, "");
        assert_eq!(response.details, "");
    }
}
