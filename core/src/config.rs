// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use evently_geocode::{DEFAULT_LIMIT, GeoapifyConfig};

use crate::autocomplete::AutocompleteOptions;

/// The name of the Evently application.
pub const APP_NAME: &str = "evently";

/// Configuration for the Evently application.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geocoding service settings.
    pub geocode: GeocodeConfig,

    /// Address autocomplete tuning.
    pub autocomplete: AutocompleteConfig,

    /// Where submitted events are written.
    pub export: ExportConfig,
}

impl Config {
    /// Normalize the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the export directory cannot be expanded, or if
    /// `autocomplete.min_length` or `autocomplete.limit` is zero.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.autocomplete.min_length == 0 {
            return Err("autocomplete.min_length must be at least 1".into());
        }
        if self.autocomplete.limit == 0 {
            return Err("autocomplete.limit must be at least 1".into());
        }

        self.export.dir = expand_path(&self.export.dir)
            .map_err(|e| format!("Failed to expand export directory path: {e}"))?;

        if let Some(country) = &self.geocode.country {
            let country = country.trim().to_ascii_lowercase();
            self.geocode.country = (!country.is_empty()).then_some(country);
        }

        if self.geocode.service.api_key().is_none() {
            tracing::warn!("no Geoapify API key configured, set geocode.api_key or GEOAPIFY_API_KEY");
        }
        Ok(())
    }

    /// Returns the controller options described by this configuration.
    #[must_use]
    pub fn autocomplete_options(&self) -> AutocompleteOptions {
        AutocompleteOptions {
            debounce: Duration::from_millis(self.autocomplete.debounce_ms),
            min_length: self.autocomplete.min_length,
            limit: self.autocomplete.limit,
            country: self.geocode.country.clone(),
        }
    }
}

/// The `[geocode]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct GeocodeConfig {
    /// Geoapify connection settings.
    #[serde(flatten)]
    pub service: GeoapifyConfig,

    /// Optional country code filter applied to every lookup.
    #[serde(default)]
    pub country: Option<String>,
}

/// The `[autocomplete]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Quiet period in milliseconds.
    pub debounce_ms: u64,

    /// Minimum number of characters before looking up.
    pub min_length: usize,

    /// Maximum number of suggestions.
    pub limit: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_length: 2,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// The `[export]` table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving `event-payload.json`.
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }
    if path == "~" {
        return get_home_dir();
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
