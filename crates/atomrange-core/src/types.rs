//! Value types produced and consumed by the model.

use serde::{Deserialize, Serialize};

use crate::enums::{BlastZoneType, DensitySource};

/// A `(longitude, latitude)` pair in degrees, GeoJSON axis order.
pub type LonLat = (f64, f64);

/// Effect-zone radii in kilometers for one yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlastData {
    pub fireball: f64,
    pub radiation: f64,
    pub heavy_blast: f64,
    pub moderate_blast: f64,
    pub light_blast: f64,
    pub thermal: f64,
}

impl BlastData {
    /// Radius of a single zone (km).
    pub fn radius(&self, zone: BlastZoneType) -> f64 {
        match zone {
            BlastZoneType::Fireball => self.fireball,
            BlastZoneType::Radiation => self.radiation,
            BlastZoneType::HeavyBlast => self.heavy_blast,
            BlastZoneType::ModerateBlast => self.moderate_blast,
            BlastZoneType::LightBlast => self.light_blast,
            BlastZoneType::Thermal => self.thermal,
        }
    }

    /// Zones paired with their radii, in zone order.
    pub fn zones(&self) -> impl Iterator<Item = (BlastZoneType, f64)> + '_ {
        BlastZoneType::ALL.iter().map(|&z| (z, self.radius(z)))
    }

    /// The outermost (thermal) radius, which bounds the whole footprint.
    pub fn outer_radius(&self) -> f64 {
        self.thermal
    }

    /// Copy with every radius rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let factor = 10_f64.powi(decimals);
        let round = |v: f64| (v * factor).round() / factor;
        Self {
            fireball: round(self.fireball),
            radiation: round(self.radiation),
            heavy_blast: round(self.heavy_blast),
            moderate_blast: round(self.moderate_blast),
            light_blast: round(self.light_blast),
            thermal: round(self.thermal),
        }
    }
}

/// A population density estimate and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityResolution {
    /// People per km².
    pub density: f64,
    pub source: DensitySource,
    /// `"<city>, <country>"`, a country name, or `"Global Average"`.
    pub name: String,
}

/// Casualties and damage inside one effect zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCasualtyResult {
    pub fatalities: u64,
    pub injuries: u64,
    /// Percentage of infrastructure destroyed (0–100).
    pub infrastructure_damage: u8,
}

/// Whole-scenario estimate over the thermal footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateImpact {
    pub density: DensityResolution,
    pub affected_population: u64,
    pub fatalities: u64,
    pub injuries: u64,
    pub infrastructure_damage: u8,
}

/// Surface wind at the detonation point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindConfig {
    /// Bearing the wind blows toward, degrees in `[0, 360)`; 0 = north, clockwise.
    pub direction: f64,
    /// Speed in km/h.
    pub speed: f64,
    /// Set when the value came from a live weather feed.
    #[serde(default)]
    pub real_time: bool,
}

impl WindConfig {
    pub fn new(direction: f64, speed: f64) -> Self {
        Self {
            direction,
            speed,
            real_time: false,
        }
    }
}

/// Downwind fallout plume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FalloutPattern {
    pub center_lat: f64,
    pub center_lon: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
    /// Peak intensity in `[0, 1]`.
    pub intensity: f64,
    /// Plume length along the wind axis (km).
    pub length: f64,
    /// Plume width across the wind axis (km).
    pub width: f64,
}

impl FalloutPattern {
    /// True when calm wind produced no plume.
    pub fn is_empty(&self) -> bool {
        self.length <= 0.0
    }
}

/// One reading from a weather source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// km/h
    pub wind_speed: f64,
    /// degrees
    pub wind_direction: f64,
    /// °C
    pub temperature: f64,
    pub description: String,
}

impl WeatherReading {
    /// Wind derived from this reading, flagged as real-time.
    pub fn to_wind(&self) -> WindConfig {
        WindConfig {
            direction: self.wind_direction,
            speed: self.wind_speed,
            real_time: true,
        }
    }
}
