//! Flat-earth projection used by the fallout plume.
//!
//! Treats one degree of latitude or longitude as a fixed 111 km with no
//! cos(lat) correction. Coarse, but the plume geometry is built on the same
//! approximation, so queries and polygons agree with each other.

use atomrange_core::constants::KM_PER_DEGREE;
use atomrange_core::types::LonLat;
use glam::DVec2;

/// Planar projection anchored at ground zero.
///
/// The anchor maps to the origin. x = East, y = North, both in km.
#[derive(Debug, Clone, Copy)]
pub struct PlanarProjection {
    pub center_lat: f64,
    pub center_lon: f64,
}

impl PlanarProjection {
    pub fn new(center_lat: f64, center_lon: f64) -> Self {
        Self {
            center_lat,
            center_lon,
        }
    }

    /// Convert lat/lon (degrees) to a local offset in km.
    pub fn to_local(&self, lat: f64, lon: f64) -> DVec2 {
        DVec2::new(
            (lon - self.center_lon) * KM_PER_DEGREE,
            (lat - self.center_lat) * KM_PER_DEGREE,
        )
    }

    /// Convert a local km offset back to `(lon, lat)`.
    pub fn to_geo(&self, offset: DVec2) -> LonLat {
        (
            self.center_lon + offset.x / KM_PER_DEGREE,
            self.center_lat + offset.y / KM_PER_DEGREE,
        )
    }

    /// Planar distance from the anchor in km.
    pub fn distance_km(&self, lat: f64, lon: f64) -> f64 {
        self.to_local(lat, lon).length()
    }

    /// Bearing from the anchor in degrees, `[0, 360)`, 0 = north, clockwise.
    pub fn bearing_deg(&self, lat: f64, lon: f64) -> f64 {
        let v = self.to_local(lat, lon);
        v.x.atan2(v.y).to_degrees().rem_euclid(360.0)
    }
}

/// Unit vector (x = East, y = North) pointing along a compass bearing.
pub fn bearing_unit(bearing_deg: f64) -> DVec2 {
    let rad = bearing_deg.to_radians();
    DVec2::new(rad.sin(), rad.cos())
}
