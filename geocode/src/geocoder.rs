// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::error::GeocodeError;
use crate::request::AutocompleteRequest;
use crate::types::Suggestion;

/// A geocoding service that turns free text into ranked place suggestions.
#[async_trait]
pub trait Geocoder: Send + Sync + 'static {
    /// Checks that the geocoder can issue requests at all.
    ///
    /// Called before every query so a misconfigured geocoder fails without
    /// touching the network.
    ///
    /// # Errors
    ///
    /// Returns a configuration error, e.g. [`GeocodeError::MissingApiKey`].
    fn ensure_configured(&self) -> Result<(), GeocodeError> {
        Ok(())
    }

    /// Queries suggestions for the request, most relevant first.
    ///
    /// # Errors
    ///
    /// Returns an error on configuration, transport or status failures.
    async fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> Result<Vec<Suggestion>, GeocodeError>;
}
