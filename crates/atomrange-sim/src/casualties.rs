//! Casualty and infrastructure damage estimates.
//!
//! Two models coexist. The per-zone model applies each zone's own rates to
//! the full disc of that zone. The aggregate model applies flat rates to the
//! whole thermal footprint. Both are deterministic.

use std::f64::consts::PI;

use atomrange_core::constants::{
    AGGREGATE_FATALITY_RATE, AGGREGATE_INFRASTRUCTURE_DAMAGE, AGGREGATE_INJURY_RATE,
};
use atomrange_core::enums::BlastZoneType;
use atomrange_core::types::{AggregateImpact, BlastData, DensityResolution, ZoneCasualtyResult};
use atomrange_core::validation::{validate_density, validate_radius};
use atomrange_core::SimResult;
use atomrange_geo::DensityResolver;

/// Area of a disc in km².
pub fn disc_area_km2(radius_km: f64) -> SimResult<f64> {
    let r = validate_radius(radius_km)?;
    Ok(PI * r * r)
}

/// Round a non-negative head count to the nearest whole person.
fn head_count(people: f64) -> u64 {
    people.round() as u64
}

/// Casualties inside a single zone of the given radius.
pub fn estimate_zone_impact(
    radius_km: f64,
    zone: BlastZoneType,
    density: f64,
) -> SimResult<ZoneCasualtyResult> {
    let area = disc_area_km2(radius_km)?;
    let density = validate_density(density)?;
    let population = area * density;

    Ok(ZoneCasualtyResult {
        fatalities: head_count(population * zone.fatality_rate()),
        injuries: head_count(population * zone.injury_rate()),
        infrastructure_damage: zone.infrastructure_damage(),
    })
}

/// Per-zone breakdown for every zone, in zone order.
pub fn estimate_all_zones(
    blast: &BlastData,
    density: f64,
) -> SimResult<Vec<(BlastZoneType, ZoneCasualtyResult)>> {
    blast
        .zones()
        .map(|(zone, radius)| Ok((zone, estimate_zone_impact(radius, zone, density)?)))
        .collect()
}

/// Whole-scenario estimate against the built-in density table.
pub fn estimate_aggregate_impact(
    blast: &BlastData,
    lat: f64,
    lon: f64,
    country: Option<&str>,
) -> SimResult<AggregateImpact> {
    estimate_aggregate_impact_with(&DensityResolver::default(), blast, lat, lon, country)
}

/// Whole-scenario estimate: density is resolved once for the point and
/// applied to the thermal (outermost) footprint with flat rates.
pub fn estimate_aggregate_impact_with(
    resolver: &DensityResolver<'_>,
    blast: &BlastData,
    lat: f64,
    lon: f64,
    country: Option<&str>,
) -> SimResult<AggregateImpact> {
    let density = resolver.resolve(lat, lon, country)?;
    aggregate_impact_for_density(blast, density)
}

/// Whole-scenario estimate for a density that is already resolved.
pub fn aggregate_impact_for_density(
    blast: &BlastData,
    density: DensityResolution,
) -> SimResult<AggregateImpact> {
    let area = disc_area_km2(blast.outer_radius())?;
    let population = area * validate_density(density.density)?;

    Ok(AggregateImpact {
        affected_population: head_count(population),
        fatalities: head_count(population * AGGREGATE_FATALITY_RATE),
        injuries: head_count(population * AGGREGATE_INJURY_RATE),
        infrastructure_damage: AGGREGATE_INFRASTRUCTURE_DAMAGE,
        density,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomrange_core::enums::DensitySource;
    use atomrange_core::SimError;

    #[test]
    fn test_fireball_one_km_thousand_density() {
        let res = estimate_zone_impact(1.0, BlastZoneType::Fireball, 1000.0).unwrap();
        assert_eq!(res.fatalities, 3142);
        assert_eq!(res.injuries, 0);
        assert_eq!(res.infrastructure_damage, 100);
    }

    #[test]
    fn test_rate_table_applied() {
        // π × 2² × 500 ≈ 6283.19 people
        let res = estimate_zone_impact(2.0, BlastZoneType::ModerateBlast, 500.0).unwrap();
        assert_eq!(res.fatalities, 2513);
        assert_eq!(res.injuries, 2827);
        assert_eq!(res.infrastructure_damage, 60);

        let res = estimate_zone_impact(2.0, BlastZoneType::LightBlast, 500.0).unwrap();
        assert_eq!(res.fatalities, 314);
        assert_eq!(res.injuries, 2199);
        assert_eq!(res.infrastructure_damage, 20);
    }

    #[test]
    fn test_every_zone_rate_row() {
        // π × 10² × 100 ≈ 31415.93 people in each zone
        let expected = [
            (BlastZoneType::Fireball, 31416, 0, 100),
            (BlastZoneType::Radiation, 28274, 3142, 10),
            (BlastZoneType::HeavyBlast, 25133, 4712, 90),
            (BlastZoneType::ModerateBlast, 12566, 14137, 60),
            (BlastZoneType::LightBlast, 1571, 10996, 20),
            (BlastZoneType::Thermal, 7854, 17279, 15),
        ];
        for (zone, fatalities, injuries, damage) in expected {
            let res = estimate_zone_impact(10.0, zone, 100.0).unwrap();
            assert_eq!(
                res,
                ZoneCasualtyResult {
                    fatalities,
                    injuries,
                    infrastructure_damage: damage,
                },
                "{zone:?} rates"
            );
        }
    }

    #[test]
    fn test_damage_independent_of_population() {
        for zone in BlastZoneType::ALL {
            let empty = estimate_zone_impact(5.0, zone, 0.0).unwrap();
            let dense = estimate_zone_impact(5.0, zone, 40_000.0).unwrap();
            assert_eq!(empty.infrastructure_damage, dense.infrastructure_damage);
            assert_eq!(empty.fatalities, 0);
            assert_eq!(empty.injuries, 0);
        }
    }

    #[test]
    fn test_zero_radius_has_no_casualties() {
        let res = estimate_zone_impact(0.0, BlastZoneType::Thermal, 10_000.0).unwrap();
        assert_eq!(res.fatalities, 0);
        assert_eq!(res.injuries, 0);
        assert_eq!(res.infrastructure_damage, 15);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            estimate_zone_impact(-1.0, BlastZoneType::Fireball, 10.0),
            Err(SimError::InvalidRadius(-1.0))
        );
        assert!(estimate_zone_impact(f64::NAN, BlastZoneType::Fireball, 10.0).is_err());
        assert_eq!(
            estimate_zone_impact(1.0, BlastZoneType::Fireball, -10.0),
            Err(SimError::InvalidDensity(-10.0))
        );
    }

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let a = estimate_zone_impact(3.7, BlastZoneType::HeavyBlast, 21_498.0).unwrap();
        let b = estimate_zone_impact(3.7, BlastZoneType::HeavyBlast, 21_498.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_zones_in_order() {
        let blast = crate::blast::compute_blast_data(15.0).unwrap();
        let zones = estimate_all_zones(&blast, 1000.0).unwrap();
        let order: Vec<_> = zones.iter().map(|(z, _)| *z).collect();
        assert_eq!(order, BlastZoneType::ALL.to_vec());
        for (zone, res) in zones {
            let single = estimate_zone_impact(blast.radius(zone), zone, 1000.0).unwrap();
            assert_eq!(res, single);
        }
    }

    #[test]
    fn test_aggregate_global_fallback() {
        let blast = BlastData {
            fireball: 0.1,
            radiation: 0.5,
            heavy_blast: 0.2,
            moderate_blast: 0.4,
            light_blast: 0.8,
            thermal: 2.0,
        };
        let agg = estimate_aggregate_impact(&blast, 0.0, 0.0, None).unwrap();
        // π × 4 × 50 ≈ 628.32
        assert_eq!(agg.density.source, DensitySource::Global);
        assert_eq!(agg.affected_population, 628);
        assert_eq!(agg.fatalities, 157);
        assert_eq!(agg.injuries, 283);
        assert_eq!(agg.infrastructure_damage, 75);
    }

    #[test]
    fn test_aggregate_uses_city_density() {
        let blast = crate::blast::compute_blast_data(15.0).unwrap();
        let agg = estimate_aggregate_impact(&blast, 14.5995, 120.9842, None).unwrap();
        assert_eq!(agg.density.source, DensitySource::City);
        let expected = PI * blast.thermal * blast.thermal * 46_178.0;
        assert_eq!(agg.affected_population, expected.round() as u64);
        assert!(agg.fatalities < agg.injuries);
    }

    #[test]
    fn test_aggregate_for_resolved_density() {
        let blast = crate::blast::compute_blast_data(300.0).unwrap();
        let resolver = DensityResolver::default();
        let density = resolver.resolve(48.8566, 2.3522, None).unwrap();
        let direct = aggregate_impact_for_density(&blast, density).unwrap();
        let resolved =
            estimate_aggregate_impact_with(&resolver, &blast, 48.8566, 2.3522, None).unwrap();
        assert_eq!(direct, resolved);
        assert_eq!(direct.density.source, DensitySource::City);
    }

    #[test]
    fn test_aggregate_rejects_negative_density() {
        let blast = crate::blast::compute_blast_data(15.0).unwrap();
        let density = DensityResolution {
            density: -1.0,
            source: DensitySource::Global,
            name: "Global Average".to_string(),
        };
        assert_eq!(
            aggregate_impact_for_density(&blast, density),
            Err(SimError::InvalidDensity(-1.0))
        );
    }

    #[test]
    fn test_aggregate_rejects_bad_coordinates() {
        let blast = crate::blast::compute_blast_data(15.0).unwrap();
        assert!(matches!(
            estimate_aggregate_impact(&blast, 0.0, 200.0, None),
            Err(SimError::InvalidCoordinates { .. })
        ));
    }
}
