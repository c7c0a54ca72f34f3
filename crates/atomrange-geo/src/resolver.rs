//! Population density resolution: nearest city, then country, then global.

use atomrange_core::constants::{GLOBAL_AVERAGE_DENSITY, GLOBAL_AVERAGE_NAME};
use atomrange_core::enums::DensitySource;
use atomrange_core::types::DensityResolution;
use atomrange_core::validation::validate_coordinates;
use atomrange_core::SimResult;
use tracing::debug;

use crate::geodesy::haversine_km;
use crate::population::{population_table, EntryKind, PopulationEntry};

/// Resolves people/km² for a coordinate against a density table.
#[derive(Debug, Clone, Copy)]
pub struct DensityResolver<'a> {
    table: &'a [PopulationEntry],
    global_density: f64,
}

impl Default for DensityResolver<'static> {
    fn default() -> Self {
        Self::new(population_table(), GLOBAL_AVERAGE_DENSITY)
    }
}

impl<'a> DensityResolver<'a> {
    pub fn new(table: &'a [PopulationEntry], global_density: f64) -> Self {
        Self {
            table,
            global_density,
        }
    }

    pub fn global_density(&self) -> f64 {
        self.global_density
    }

    /// Resolve density at `(lat, lon)`. The first match wins:
    ///
    /// 1. the closest city whose coverage radius contains the point,
    /// 2. the country-average entry named by `country` (trimmed, case-insensitive),
    /// 3. the global average.
    pub fn resolve(&self, lat: f64, lon: f64, country: Option<&str>) -> SimResult<DensityResolution> {
        validate_coordinates(lat, lon)?;

        if let Some((entry, distance)) = self.nearest_city(lat, lon) {
            debug!(
                name = %entry.display_name(),
                density = entry.density,
                distance_km = distance,
                "Using city density"
            );
            return Ok(DensityResolution {
                density: entry.density,
                source: DensitySource::City,
                name: entry.display_name(),
            });
        }

        if let Some(entry) = country.and_then(|name| self.find_country(name)) {
            debug!(country = entry.country, density = entry.density, "Using country density");
            return Ok(DensityResolution {
                density: entry.density,
                source: DensitySource::Country,
                name: entry.display_name(),
            });
        }

        debug!(density = self.global_density, "Using global average density");
        Ok(DensityResolution {
            density: self.global_density,
            source: DensitySource::Global,
            name: GLOBAL_AVERAGE_NAME.to_string(),
        })
    }

    /// Closest city containing the point, with its distance in km.
    /// Strict comparison keeps the earlier table entry on exact ties.
    pub fn nearest_city(&self, lat: f64, lon: f64) -> Option<(&'a PopulationEntry, f64)> {
        let mut best: Option<(&'a PopulationEntry, f64)> = None;

        for entry in self.table {
            let radius = match entry.kind {
                EntryKind::City { radius_km, .. } => radius_km,
                EntryKind::Country => continue,
            };
            let distance = haversine_km(lat, lon, entry.lat, entry.lon);
            if distance > radius {
                continue;
            }
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((entry, distance));
            }
        }

        best
    }

    /// Country-average entry whose name matches, ignoring case and surrounding whitespace.
    pub fn find_country(&self, name: &str) -> Option<&'a PopulationEntry> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.table
            .iter()
            .find(|e| e.kind == EntryKind::Country && e.country.to_lowercase() == normalized)
    }
}

/// Resolve density against the built-in table.
pub fn resolve_density(lat: f64, lon: f64, country: Option<&str>) -> SimResult<DensityResolution> {
    DensityResolver::default().resolve(lat, lon, country)
}

/// Density value only, against the built-in table.
pub fn density_at(lat: f64, lon: f64, country: Option<&str>) -> SimResult<f64> {
    resolve_density(lat, lon, country).map(|r| r.density)
}
