// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Map view derived from the selected location.

use evently_geocode::{LatLng, MAX_ZOOM, TileCoord};

use crate::selection::SelectedLocation;

/// Center shown when nothing with coordinates is selected.
pub const DEFAULT_CENTER: LatLng = LatLng::new(20.5937, 78.9629);

/// Zoom level of the default, country-wide view.
pub const WIDE_ZOOM: u8 = 5;

/// Zoom level used around a selected location.
pub const CLOSE_ZOOM: u8 = 15;

/// Width of the drawn window, in tiles.
const WINDOW_TILES: f64 = 2.0;

/// What the map shows: a center, a zoom level and at most one marker.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MapView {
    /// Center of the view.
    pub center: LatLng,
    /// Slippy-map zoom level.
    pub zoom: u8,
    /// The selected location, if it has coordinates.
    pub marker: Option<LatLng>,
}

impl MapView {
    /// Derives the view for the current selection.
    ///
    /// A selection with coordinates is shown close up with a marker on it;
    /// anything else falls back to the wide default view without a marker.
    #[must_use]
    pub fn for_selection(selection: Option<&SelectedLocation>) -> Self {
        match selection.and_then(SelectedLocation::position) {
            Some(point) => Self {
                center: point,
                zoom: CLOSE_ZOOM,
                marker: Some(point),
            },
            None => Self::default(),
        }
    }

    /// Returns the tile under the center of the view.
    #[must_use]
    pub fn center_tile(&self) -> TileCoord {
        TileCoord::containing(self.center, self.zoom)
    }

    /// Returns the lon/lat window drawn for this view.
    ///
    /// The window is two tiles wide at the view's zoom level; `aspect` is
    /// the width-to-height ratio of the drawing area. Edges are clamped to
    /// the valid coordinate range.
    #[must_use]
    pub fn bounds(&self, aspect: f64) -> Bounds {
        let zoom = self.zoom.min(MAX_ZOOM);
        let width = (360.0 / f64::from(1u32 << zoom) * WINDOW_TILES).min(360.0);
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let height = (width / aspect).min(180.0);

        Bounds {
            west: (self.center.lng - width / 2.0).max(-180.0),
            east: (self.center.lng + width / 2.0).min(180.0),
            south: (self.center.lat - height / 2.0).max(-90.0),
            north: (self.center.lat + height / 2.0).min(90.0),
        }
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: WIDE_ZOOM,
            marker: None,
        }
    }
}

/// A lon/lat rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Western edge (longitude).
    pub west: f64,
    /// Eastern edge (longitude).
    pub east: f64,
    /// Southern edge (latitude).
    pub south: f64,
    /// Northern edge (latitude).
    pub north: f64,
}

impl Bounds {
    /// Returns true if the point lies within the rectangle.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.west..=self.east).contains(&point.lng) && (self.south..=self.north).contains(&point.lat)
    }
}
