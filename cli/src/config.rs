// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use evently_core::{APP_NAME, Config};
use tokio::fs;

const EVENTLY_CONFIG_ENV: &str = "EVENTLY_CONFIG";
const GEOAPIFY_API_KEY_ENV: &str = "GEOAPIFY_API_KEY";

/// Loads the configuration.
///
/// The file is taken from `path`, then `$EVENTLY_CONFIG`, then the user config
/// directory. Only a missing default file falls back to the defaults; an
/// explicitly named file must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(EVENTLY_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if config.exists() {
            Some(config)
        } else {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            None
        }
    };

    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(&path).await.map_err(|e| {
                format!("Failed to read config file at {}: {}", path.display(), e)
            })?;
            toml::from_str(&content).map_err(|e| {
                format!("Failed to parse config file at {}: {}", path.display(), e)
            })?
        }
        None => Config::default(),
    };

    if let Ok(key) = std::env::var(GEOAPIFY_API_KEY_ENV)
        && !key.trim().is_empty()
    {
        config.geocode.service.api_key = Some(key);
    }

    config.normalize()?;
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
