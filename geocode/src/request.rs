// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request builder for the autocomplete endpoint.

/// Default number of suggestions requested.
pub const DEFAULT_LIMIT: usize = 6;

/// Autocomplete query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteRequest {
    /// Free text typed by the user.
    pub text: String,
    /// Maximum number of suggestions.
    pub limit: usize,
    /// Optional ISO 3166-1 alpha-2 country code to restrict results.
    pub country: Option<String>,
}

impl AutocompleteRequest {
    /// Creates a request with the default limit and no country filter.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_LIMIT,
            country: None,
        }
    }

    /// Sets the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restricts results to a country.
    #[must_use]
    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    /// Builds the query string pairs, including the credential.
    pub(crate) fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("text", self.text.clone()),
            ("limit", self.limit.to_string()),
            ("apiKey", api_key.to_string()),
        ];

        let country = self
            .country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        if let Some(cc) = country {
            pairs.push(("filter", format!("countrycode:{}", cc.to_lowercase())));
        }
        pairs
    }
}
