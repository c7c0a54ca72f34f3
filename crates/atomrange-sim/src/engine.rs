//! Scenario engine: runs one detonation end to end.
//!
//! `Simulator` owns the model configuration, the density resolver and a
//! seeded RNG. Given the same seed and the same sequence of requests it
//! produces byte-identical reports.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use atomrange_core::catalog::bomb_by_id;
use atomrange_core::enums::BlastZoneType;
use atomrange_core::types::{
    AggregateImpact, BlastData, DensityResolution, FalloutPattern, LonLat, WindConfig,
    ZoneCasualtyResult,
};
use atomrange_core::validation::{validate_coordinates, validate_yield, validate_wind};
use atomrange_core::{SimError, SimResult};
use atomrange_geo::DensityResolver;

use crate::blast::compute_blast_data;
use crate::casualties::{aggregate_impact_for_density, estimate_zone_impact};
use crate::config::ModelConfig;
use crate::fallout::{
    compute_fallout_pattern, fallout_casualties, fallout_polygon_with_segments,
    sample_width_fraction_in,
};
use crate::wind::{generate_random_wind, wind_direction_name};

/// One detonation to evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub yield_kt: f64,
    pub lat: f64,
    pub lon: f64,
    /// Reverse-geocoded country, used when no city covers the point.
    #[serde(default)]
    pub country: Option<String>,
    /// Surface wind; no fallout is computed without it.
    #[serde(default)]
    pub wind: Option<WindConfig>,
}

impl SimulationRequest {
    pub fn new(yield_kt: f64, lat: f64, lon: f64) -> Self {
        Self {
            yield_kt,
            lat,
            lon,
            country: None,
            wind: None,
        }
    }

    /// Request for a catalog weapon.
    pub fn for_bomb(bomb_id: &str, lat: f64, lon: f64) -> SimResult<Self> {
        let bomb = bomb_by_id(bomb_id).ok_or_else(|| SimError::UnknownBomb(bomb_id.to_string()))?;
        Ok(Self::new(bomb.yield_kt, lat, lon))
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_wind(mut self, wind: WindConfig) -> Self {
        self.wind = Some(wind);
        self
    }
}

/// One effect zone in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneReport {
    pub zone: BlastZoneType,
    pub name: &'static str,
    pub radius_km: f64,
    pub overpressure_psi: Option<f64>,
    pub casualties: ZoneCasualtyResult,
}

/// Fallout plume and its consequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FalloutReport {
    pub pattern: FalloutPattern,
    pub polygon: Vec<LonLat>,
    pub casualties: u64,
    pub wind_direction_name: &'static str,
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub request: SimulationRequest,
    pub blast: BlastData,
    pub density: DensityResolution,
    /// Per-zone breakdown, innermost first.
    pub zones: Vec<ZoneReport>,
    /// Flat-rate estimate over the thermal footprint.
    pub aggregate: AggregateImpact,
    pub fallout: Option<FalloutReport>,
}

impl SimulationReport {
    pub fn zone(&self, zone: BlastZoneType) -> Option<&ZoneReport> {
        self.zones.iter().find(|z| z.zone == zone)
    }
}

/// The scenario engine.
pub struct Simulator {
    config: ModelConfig,
    resolver: DensityResolver<'static>,
    rng: ChaCha8Rng,
    runs: u64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_validated(ModelConfig::default())
    }
}

impl Simulator {
    /// Create a simulator; rejects an inconsistent config.
    pub fn new(config: ModelConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: ModelConfig) -> Self {
        let resolver = DensityResolver::new(atomrange_geo::population_table(), config.global_density);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            resolver,
            config,
            runs: 0,
        }
    }

    /// Simulator with default config and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_validated(ModelConfig {
            seed,
            ..ModelConfig::default()
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn resolver(&self) -> &DensityResolver<'static> {
        &self.resolver
    }

    /// Number of successful runs so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Draw a random wind from the simulator's RNG.
    pub fn random_wind(&mut self) -> WindConfig {
        generate_random_wind(&mut self.rng)
    }

    /// Evaluate one detonation.
    ///
    /// All inputs are validated before any randomness is consumed, so a
    /// rejected request leaves the RNG stream untouched.
    pub fn run(&mut self, request: &SimulationRequest) -> SimResult<SimulationReport> {
        validate_yield(request.yield_kt)?;
        validate_coordinates(request.lat, request.lon)?;
        if let Some(wind) = &request.wind {
            validate_wind(wind)?;
        }
        let country = request.country.as_deref();

        let density = self.resolver.resolve(request.lat, request.lon, country)?;
        let blast = compute_blast_data(request.yield_kt)?;
        debug!(
            yield_kt = request.yield_kt,
            thermal_km = blast.thermal,
            density = density.density,
            source = density.source.as_str(),
            "Blast radii computed"
        );

        let zones = blast
            .zones()
            .map(|(zone, radius_km)| {
                Ok(ZoneReport {
                    zone,
                    name: zone.name(),
                    radius_km,
                    overpressure_psi: zone.overpressure_psi(),
                    casualties: estimate_zone_impact(radius_km, zone, density.density)?,
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let aggregate = aggregate_impact_for_density(&blast, density.clone())?;

        let fallout = match &request.wind {
            Some(wind) => Some(self.fallout(request, wind, density.density)?),
            None => None,
        };

        self.runs += 1;
        info!(
            run = self.runs,
            yield_kt = request.yield_kt,
            lat = request.lat,
            lon = request.lon,
            fatalities = aggregate.fatalities,
            fallout = fallout.is_some(),
            "Simulation complete"
        );

        Ok(SimulationReport {
            request: request.clone(),
            blast,
            density,
            zones,
            aggregate,
            fallout,
        })
    }

    fn fallout(
        &mut self,
        request: &SimulationRequest,
        wind: &WindConfig,
        density: f64,
    ) -> SimResult<FalloutReport> {
        let fc = &self.config.fallout;
        let fraction =
            sample_width_fraction_in(&mut self.rng, fc.min_width_fraction, fc.max_width_fraction)?;
        let pattern =
            compute_fallout_pattern(request.lat, request.lon, request.yield_kt, wind, fraction)?;
        let polygon = fallout_polygon_with_segments(&pattern, fc.polygon_scale, fc.polygon_segments)?;
        let casualties = fallout_casualties(&pattern, density)?;
        debug!(
            length_km = pattern.length,
            width_km = pattern.width,
            intensity = pattern.intensity,
            casualties,
            "Fallout plume computed"
        );

        Ok(FalloutReport {
            pattern,
            polygon,
            casualties,
            wind_direction_name: wind_direction_name(wind.direction),
        })
    }
}
