// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::sync::Arc;
use std::time::Duration;

use evently_core::{
    AutocompleteController, AutocompleteOptions, Geocoder, Suggestion, SuggestionId,
};

/// Bengaluru, with coordinates.
#[must_use]
pub fn bengaluru() -> Suggestion {
    Suggestion {
        id: SuggestionId::PlaceId("51d6c5".to_string()),
        formatted: "Bengaluru, Karnataka, India".to_string(),
        lat: Some(12.97),
        lon: Some(77.59),
        region: Some("Karnataka".to_string()),
    }
}

/// A place the service knows no point for.
#[must_use]
pub fn unnamed_road() -> Suggestion {
    Suggestion {
        id: SuggestionId::derive("Unnamed Road", None, None),
        formatted: "Unnamed Road".to_string(),
        lat: None,
        lon: None,
        region: Some("India".to_string()),
    }
}

/// `n` distinct suggestions with coordinates.
#[must_use]
pub fn numbered(n: u32) -> Vec<Suggestion> {
    (0..n)
        .map(|i| {
            let formatted = format!("MG Road {i}, Bengaluru");
            let lat = 12.97 + f64::from(i) / 100.0;
            Suggestion {
                id: SuggestionId::derive(&formatted, Some(lat), Some(77.59)),
                formatted,
                lat: Some(lat),
                lon: Some(77.59),
                region: None,
            }
        })
        .collect()
}

/// Options with a short debounce for tests running on the real clock.
#[must_use]
pub fn fast_options() -> AutocompleteOptions {
    AutocompleteOptions {
        debounce: Duration::from_millis(10),
        ..Default::default()
    }
}

/// A controller with default options.
#[must_use]
pub fn controller(geocoder: Arc<dyn Geocoder>) -> AutocompleteController {
    AutocompleteController::new(geocoder, AutocompleteOptions::default())
}
