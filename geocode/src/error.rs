// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Geocoding errors.
///
/// Every variant carries owned strings so the error can be stored in
/// widget state and cloned into views.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodeError {
    /// No API key was configured.
    #[error("No Geoapify API key provided.")]
    MissingApiKey,

    /// The service answered with a non-success status.
    #[error("Geoapify error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Transport layer error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body could not be understood.
    #[error("Invalid geocoder response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeocodeError {
    /// Returns true for errors caused by configuration rather than the network.
    ///
    /// Configuration errors will not heal by retrying the same query.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::Config(_))
    }

    /// Returns the HTTP status code, if the service answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
