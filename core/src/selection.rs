// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use evently_geocode::{LatLng, Suggestion};

/// The location committed by picking a suggestion.
///
/// Coordinates are absent when the picked suggestion had no point; the
/// formatted label is always kept.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SelectedLocation {
    /// Latitude, if known.
    pub lat: Option<f64>,
    /// Longitude, if known.
    pub lng: Option<f64>,
    /// Formatted address label.
    pub formatted: String,
}

impl SelectedLocation {
    /// Creates a selection with coordinates.
    pub fn new(lat: f64, lng: f64, formatted: impl Into<String>) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            formatted: formatted.into(),
        }
    }

    /// Creates a label-only selection.
    pub fn label_only(formatted: impl Into<String>) -> Self {
        Self {
            lat: None,
            lng: None,
            formatted: formatted.into(),
        }
    }

    /// Returns the point, if both coordinates are known.
    #[must_use]
    pub fn position(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }

    /// Returns true if both coordinates are known.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.position().is_some()
    }
}

impl From<&Suggestion> for SelectedLocation {
    fn from(s: &Suggestion) -> Self {
        match s.position() {
            Some(p) => Self::new(p.lat, p.lng, s.formatted.clone()),
            None => Self::label_only(s.formatted.clone()),
        }
    }
}

impl fmt::Display for SelectedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(p) => write!(f, "{} ({p})", self.formatted),
            None => write!(f, "{}", self.formatted),
        }
    }
}
