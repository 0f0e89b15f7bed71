// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Web-Mercator slippy map tiles.

use std::f64::consts::PI;
use std::fmt;

use crate::types::LatLng;

/// Latitude limit of the Web-Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Highest zoom level served by the tile server.
pub const MAX_ZOOM: u8 = 20;

/// A tile address `z/x/y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TileCoord {
    /// Zoom level.
    pub z: u8,
    /// Column, from the antimeridian eastwards.
    pub x: u32,
    /// Row, from the north edge southwards.
    pub y: u32,
}

impl TileCoord {
    /// Returns the tile containing `point` at `zoom`.
    ///
    /// Latitudes beyond the projection limit are clamped, and the zoom is
    /// capped at [`MAX_ZOOM`].
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn containing(point: LatLng, zoom: u8) -> Self {
        let z = zoom.min(MAX_ZOOM);
        let n = tiles_per_side(z);
        let max_index = (1u64 << z) - 1;

        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let lng = (point.lng + 180.0).rem_euclid(360.0);

        let x = (lng / 360.0 * n).floor();
        let y = ((1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n).floor();

        let clamp = |v: f64| (v.max(0.0) as u64).min(max_index) as u32;
        Self {
            z,
            x: clamp(x),
            y: clamp(y),
        }
    }

    /// Returns the north-west corner of the tile.
    #[must_use]
    ///
    /// Any zoom is accepted, including ones beyond [`MAX_ZOOM`].
    pub fn north_west(self) -> LatLng {
        let n = tiles_per_side(self.z);
        let lng = f64::from(self.x) / n * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * f64::from(self.y) / n)).sinh().atan();
        LatLng::new(lat.to_degrees(), lng)
    }
}

fn tiles_per_side(z: u8) -> f64 {
    2f64.powi(i32::from(z))
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_west_beyond_max_zoom() {
        let corner = TileCoord { z: 40, x: 0, y: 0 }.north_west();
        assert!((corner.lng + 180.0).abs() < 1e-9);
        assert!((corner.lat - MAX_LATITUDE).abs() < 1e-6);

        let tile = TileCoord { z: 32, x: u32::MAX, y: 0 };
        assert!(tile.north_west().lng < 180.0);
    }

    #[test]
    fn zoom_zero_is_single_tile() {
        let t = TileCoord::containing(LatLng::new(12.97, 77.59), 0);
        assert_eq!(t, TileCoord { z: 0, x: 0, y: 0 });
    }

    #[test]
    fn known_tile_for_bengaluru() {
        // 77.59E / 12.97N at z5: x = floor(257.59 / 360 * 32) = 22, y = 14
        let t = TileCoord::containing(LatLng::new(12.97, 77.59), 5);
        assert_eq!(t, TileCoord { z: 5, x: 22, y: 14 });
        assert_eq!(t.to_string(), "5/22/14");
    }

    #[test]
    fn extreme_points_stay_in_range() {
        let t = TileCoord::containing(LatLng::new(90.0, 180.0), 3);
        assert!(t.x < 8 && t.y < 8);
        let t = TileCoord::containing(LatLng::new(-90.0, -180.0), 3);
        assert!(t.x < 8 && t.y < 8);
    }

    #[test]
    fn zoom_is_capped() {
        let t = TileCoord::containing(LatLng::new(0.0, 0.0), 30);
        assert_eq!(t.z, MAX_ZOOM);
    }

    #[test]
    fn north_west_corner_contains_point() {
        let p = LatLng::new(48.8566, 2.3522);
        let t = TileCoord::containing(p, 12);
        let nw = t.north_west();
        assert!(nw.lat >= p.lat);
        assert!(nw.lng <= p.lng);
    }
}
