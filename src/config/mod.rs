//! Client configuration stored as TOML in the app root.

mod io;
mod types;

pub use io::{CONFIG_FILE_NAME, SERVER_URL_ENV, config_path, load_or_default, save_to_path};
pub use types::{
    AppConfig, ConfigError, DEFAULT_BASE_URL, ErrorBodyPolicy, NotificationSettings,
    ServerSettings, UiSettings,
};
