use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::AppDirError;

/// Default server root used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppConfig {
    /// Replace zero or unparseable values with their defaults.
    pub fn normalized(mut self) -> Self {
        self.server = self.server.normalized();
        self.notifications = self.notifications.normalized();
        self.ui = self.ui.normalized();
        self
    }
}

/// How a non-2xx training response with a well-formed body is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorBodyPolicy {
    /// Use the body as a regular training response.
    #[default]
    Logical,
    /// Report every non-2xx status as a transport failure.
    Transport,
}

/// Location and timeouts of the training/prediction service.
///
/// Config keys: `base_url`, `train_path`, `predict_path`,
/// `connect_timeout_secs`, `train_timeout_secs`, `predict_timeout_secs`,
/// `error_bodies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_train_path")]
    pub train_path: String,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Training runs the whole pipeline server-side; the server itself gives up after ten minutes.
    #[serde(default = "default_train_timeout_secs")]
    pub train_timeout_secs: u64,
    #[serde(default = "default_predict_timeout_secs")]
    pub predict_timeout_secs: u64,
    #[serde(default)]
    pub error_bodies: ErrorBodyPolicy,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            train_path: default_train_path(),
            predict_path: default_predict_path(),
            connect_timeout_secs: default_connect_timeout_secs(),
            train_timeout_secs: default_train_timeout_secs(),
            predict_timeout_secs: default_predict_timeout_secs(),
            error_bodies: ErrorBodyPolicy::default(),
        }
    }
}

impl ServerSettings {
    fn normalized(mut self) -> Self {
        if url::Url::parse(self.base_url.trim()).is_err() {
            tracing::warn!("Ignoring invalid server base_url {:?}", self.base_url);
            self.base_url = default_base_url();
        }
        self.base_url = self.base_url.trim().to_string();
        if self.train_path.trim().is_empty() {
            self.train_path = default_train_path();
        }
        if self.predict_path.trim().is_empty() {
            self.predict_path = default_predict_path();
        }
        if self.connect_timeout_secs == 0 {
            self.connect_timeout_secs = default_connect_timeout_secs();
        }
        if self.train_timeout_secs == 0 {
            self.train_timeout_secs = default_train_timeout_secs();
        }
        if self.predict_timeout_secs == 0 {
            self.predict_timeout_secs = default_predict_timeout_secs();
        }
        self
    }

    /// Absolute URL of the training endpoint.
    pub fn train_url(&self) -> Result<url::Url, ConfigError> {
        self.endpoint_url(&self.train_path)
    }

    /// Absolute URL of the prediction endpoint.
    pub fn predict_url(&self) -> Result<url::Url, ConfigError> {
        self.endpoint_url(&self.predict_path)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn train_timeout(&self) -> Duration {
        Duration::from_secs(self.train_timeout_secs)
    }

    pub fn predict_timeout(&self) -> Duration {
        Duration::from_secs(self.predict_timeout_secs)
    }

    fn endpoint_url(&self, path: &str) -> Result<url::Url, ConfigError> {
        let mut base =
            url::Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidUrl {
                value: self.base_url.clone(),
                source,
            })?;
        // Endpoint paths are relative to the base path, which must end in one slash.
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|source| ConfigError::InvalidUrl {
                value: path.to_string(),
                source,
            })
    }
}

/// Notification timing in milliseconds.
///
/// Config keys: `dwell_ms`, `exit_ms`, `entrance_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Time from insertion until the exit transition starts.
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
    /// Length of the exit transition; removal happens when it ends.
    #[serde(default = "default_transition_ms")]
    pub exit_ms: u64,
    #[serde(default = "default_transition_ms")]
    pub entrance_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dwell_ms: default_dwell_ms(),
            exit_ms: default_transition_ms(),
            entrance_ms: default_transition_ms(),
        }
    }
}

impl NotificationSettings {
    fn normalized(mut self) -> Self {
        if self.dwell_ms == 0 {
            self.dwell_ms = default_dwell_ms();
        }
        if self.exit_ms == 0 {
            self.exit_ms = default_transition_ms();
        }
        if self.entrance_ms == 0 {
            self.entrance_ms = default_transition_ms();
        }
        self
    }
}

/// Delays for the cosmetic follow-ups around the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
    #[serde(default = "default_true")]
    pub startup_tip: bool,
    #[serde(default = "default_startup_tip_delay_ms")]
    pub startup_tip_delay_ms: u64,
    #[serde(default = "default_example_highlight_ms")]
    pub example_highlight_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            scroll_delay_ms: default_scroll_delay_ms(),
            startup_tip: true,
            startup_tip_delay_ms: default_startup_tip_delay_ms(),
            example_highlight_ms: default_example_highlight_ms(),
        }
    }
}

impl UiSettings {
    fn normalized(mut self) -> Self {
        if self.scroll_delay_ms == 0 {
            self.scroll_delay_ms = default_scroll_delay_ms();
        }
        if self.startup_tip_delay_ms == 0 {
            self.startup_tip_delay_ms = default_startup_tip_delay_ms();
        }
        if self.example_highlight_ms == 0 {
            self.example_highlight_ms = default_example_highlight_ms();
        }
        self
    }
}

/// Errors that may occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config directory unavailable: {0}")]
    AppDir(#[from] AppDirError),
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("Invalid server URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_train_path() -> String {
    "/train".to_string()
}

fn default_predict_path() -> String {
    "/predict".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_train_timeout_secs() -> u64 {
    660
}

fn default_predict_timeout_secs() -> u64 {
    30
}

fn default_dwell_ms() -> u64 {
    4000
}

fn default_transition_ms() -> u64 {
    300
}

fn default_scroll_delay_ms() -> u64 {
    1500
}

fn default_startup_tip_delay_ms() -> u64 {
    1000
}

fn default_example_highlight_ms() -> u64 {
    500
}
