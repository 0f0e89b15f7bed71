// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Geoapify client for autocomplete and tile operations.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use crate::config::GeoapifyConfig;
use crate::error::GeocodeError;
use crate::geocoder::Geocoder;
use crate::http::HttpClient;
use crate::request::AutocompleteRequest;
use crate::response::parse_suggestions;
use crate::tile::TileCoord;
use crate::types::Suggestion;

const AUTOCOMPLETE_PATH: &str = "/v1/geocode/autocomplete";

/// Client for the Geoapify geocoding and tile services.
///
/// # Example
///
/// ```ignore
/// use evently_geocode::{AutocompleteRequest, GeoapifyClient, GeoapifyConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GeoapifyConfig {
///     api_key: Some("YOUR_KEY".to_string()),
///     ..Default::default()
/// };
///
/// let client = GeoapifyClient::new(config)?;
/// let suggestions = client
///     .autocomplete(&AutocompleteRequest::new("MG Road, Bengaluru"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeoapifyClient {
    http: Arc<HttpClient>,
    endpoint: Url,
    config: GeoapifyConfig,
}

impl GeoapifyClient {
    /// Creates a new client.
    ///
    /// A missing API key is not an error here; it is reported on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client
    /// initialization fails.
    pub fn new(config: GeoapifyConfig) -> Result<Self, GeocodeError> {
        let endpoint = format!("{}{AUTOCOMPLETE_PATH}", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| GeocodeError::Config(format!("invalid base URL {endpoint}: {e}")))?;

        if config.api_key().is_none() {
            tracing::warn!("no Geoapify API key configured, address lookups will fail");
        }

        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            endpoint,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GeoapifyConfig {
        &self.config
    }

    /// Queries autocomplete suggestions.
    ///
    /// At most `request.limit` suggestions are returned, in service order.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingApiKey`] without issuing a request if no
    /// key is configured, and a status or transport error if the request fails.
    #[tracing::instrument(skip_all, fields(text = %request.text))]
    pub async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Suggestion>, GeocodeError> {
        let api_key = self.api_key()?;

        let req = self
            .http
            .get(self.endpoint.clone())
            .query(&request.query_pairs(api_key));
        let resp = self.http.execute(req).await?;
        let body = resp.text().await?;

        let mut suggestions = parse_suggestions(&body)?;
        suggestions.truncate(request.limit);
        tracing::debug!(count = suggestions.len(), "received suggestions");
        Ok(suggestions)
    }

    /// Returns the tile URL template with `{z}`, `{x}` and `{y}` placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingApiKey`] if no key is configured.
    pub fn tile_url_template(&self) -> Result<String, GeocodeError> {
        Ok(format!(
            "{}/v1/tile/{}/{{z}}/{{x}}/{{y}}.png?apiKey={}",
            self.config.tile_base_url.trim_end_matches('/'),
            self.config.tile_style,
            self.api_key()?,
        ))
    }

    /// Returns the URL of a single tile.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::MissingApiKey`] if no key is configured.
    pub fn tile_url(&self, tile: TileCoord) -> Result<String, GeocodeError> {
        Ok(self
            .tile_url_template()?
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string()))
    }

    fn api_key(&self) -> Result<&str, GeocodeError> {
        self.config.api_key().ok_or(GeocodeError::MissingApiKey)
    }
}

#[async_trait]
impl Geocoder for GeoapifyClient {
    fn ensure_configured(&self) -> Result<(), GeocodeError> {
        self.api_key().map(|_| ())
    }

    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Suggestion>, GeocodeError> {
        GeoapifyClient::autocomplete(self, request).await
    }
}
