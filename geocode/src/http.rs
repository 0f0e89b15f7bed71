// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with status handling.

use reqwest::{Client, RequestBuilder, Response};

use crate::config::GeoapifyConfig;
use crate::error::GeocodeError;

/// HTTP client for Geoapify operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &GeoapifyConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a GET request.
    pub fn get(&self, url: reqwest::Url) -> RequestBuilder {
        self.client.get(url)
    }

    /// Executes a request and turns non-success statuses into errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-2xx status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, GeocodeError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        Err(GeocodeError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
