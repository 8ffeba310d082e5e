//! Loading header configuration from disk and the environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use tracing::{debug, warn};

use crate::{ConfigError, HeaderConfig};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "HEADNAV_CONFIG_PATH";
pub const ID_SELECTOR_ENV: &str = "HEADNAV_ID_SELECTOR";
pub const NAV_STYLE_ENV: &str = "HEADNAV_NAV_STYLE";
pub const SUB_NAV_STYLE_ENV: &str = "HEADNAV_SUB_NAV_STYLE";

/// Default filename for the config payload.
pub const CONFIG_FILE_NAME: &str = "header.json";

/// Returns the default path for the header configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path.trim());
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("headnav")
        .join(CONFIG_FILE_NAME)
}

/// Loads configuration from the default path, then applies environment overrides.
pub fn load_config() -> Result<HeaderConfig, ConfigError> {
    let config = load_config_from_path(&default_config_path())?;
    apply_env_overrides(config)
}

/// Loads configuration from `path`. A missing file yields the default config.
///
/// `.json` files are parsed as JSON; anything else as YAML.
pub fn load_config_from_path(path: &Path) -> Result<HeaderConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no header config file; using defaults");
            return Ok(HeaderConfig::default());
        }
        Err(error) => return Err(ConfigError::Io(error)),
    };

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        serde_json::from_str(&content)?
    } else if content.trim().is_empty() {
        HeaderConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(config)
}

/// Layers `HEADNAV_*` environment variables over `config`. Empty values are skipped.
pub fn apply_env_overrides(mut config: HeaderConfig) -> Result<HeaderConfig, ConfigError> {
    if let Some(id_selector) = read_env(ID_SELECTOR_ENV) {
        config.id_selector = Some(id_selector);
    }
    if let Some(nav_style) = read_env_index(NAV_STYLE_ENV)? {
        config.nav_style = Some(nav_style);
    }
    if let Some(sub_nav_style) = read_env_index(SUB_NAV_STYLE_ENV)? {
        config.sub_nav_style = Some(sub_nav_style);
    }
    Ok(config)
}

fn read_env(variable: &str) -> Option<String> {
    env::var(variable)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn read_env_index(variable: &str) -> Result<Option<usize>, ConfigError> {
    let Some(raw) = read_env(variable) else {
        return Ok(None);
    };
    match raw.parse::<usize>() {
        Ok(index) => Ok(Some(index)),
        Err(error) => {
            warn!(variable, value = %raw, "style override is not a non-negative integer");
            Err(ConfigError::invalid_override(variable, raw, error.to_string()))
        }
    }
}
