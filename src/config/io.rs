use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::types::{AppConfig, ConfigError};

/// Default filename used to store the client configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that replaces `server.base_url`.
pub const SERVER_URL_ENV: &str = "CELLAR_SERVER_URL";

/// Resolve the configuration file path inside the app root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, writing defaults on first launch.
///
/// `CELLAR_SERVER_URL` is applied after loading and is never persisted.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    let mut config = if path.exists() {
        load_from(&path)?
    } else {
        let config = AppConfig::default();
        save_to_path(&config, &path)?;
        tracing::info!("Wrote default config to {}", path.display());
        config
    };
    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        config.server.base_url = url;
        config = config.normalized();
    }
    Ok(config)
}

pub(crate) fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map(AppConfig::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
