// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// A point in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Stable identity of a suggestion.
///
/// The upstream identifier is used when present; otherwise the identity is
/// derived from the label and coordinates, so the same place always gets the
/// same key across queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SuggestionId {
    /// `properties.place_id` from the service.
    PlaceId(String),
    /// `properties.osm_id` from the service.
    OsmId(String),
    /// Derived from the formatted label and the coordinates.
    Derived(String),
}

impl SuggestionId {
    /// Derives an identity from the label and the coordinates.
    #[must_use]
    pub fn derive(formatted: &str, lat: Option<f64>, lon: Option<f64>) -> Self {
        let coord = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        Self::Derived(format!("{formatted}@{},{}", coord(lat), coord(lon)))
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlaceId(s) | Self::OsmId(s) | Self::Derived(s) => s,
        }
    }
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// One candidate place returned by the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Suggestion {
    /// Identity of the place.
    pub id: SuggestionId,
    /// Human readable label.
    pub formatted: String,
    /// Latitude, if the service knows a point for the place.
    pub lat: Option<f64>,
    /// Longitude, if the service knows a point for the place.
    pub lon: Option<f64>,
    /// Coarse region hint for display (state, city or country).
    pub region: Option<String>,
}

impl Suggestion {
    /// Returns the point of the place, if both coordinates are known.
    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(LatLng::new(lat, lon))
            }
            _ => None,
        }
    }
}
