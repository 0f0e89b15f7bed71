// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Geoapify service configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct GeoapifyConfig {
    /// API key, shared by the geocoder and the tile server.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the geocoding API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the tile server.
    #[serde(default = "default_tile_base_url")]
    pub tile_base_url: String,
    /// Tile style name (e.g., `osm-bright`).
    #[serde(default = "default_tile_style")]
    pub tile_style: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl GeoapifyConfig {
    /// Returns the API key, treating an empty or blank key as missing.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

fn default_base_url() -> String {
    "https://api.geoapify.com".to_string()
}

fn default_tile_base_url() -> String {
    "https://maps.geoapify.com".to_string()
}

fn default_tile_style() -> String {
    "osm-bright".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("evently-geocode/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeoapifyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            tile_base_url: default_tile_base_url(),
            tile_style: default_tile_style(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
