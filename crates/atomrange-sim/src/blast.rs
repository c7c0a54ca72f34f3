//! Blast effects model: yield → effect-zone radii.
//!
//! Overpressure zones scale with the cube root of yield; thermal and prompt
//! radiation zones scale with yield^0.41.

use atomrange_core::constants::*;
use atomrange_core::enums::BlastZoneType;
use atomrange_core::types::BlastData;
use atomrange_core::validation::validate_yield;
use atomrange_core::SimResult;

/// Zone radii in km for a validated yield, rounded to 2 decimals.
///
/// Below about 0.001 kt rounding can tie zones or zero them out; use
/// [`blast_radii`] when strict zone ordering matters.
pub fn compute_blast_data(yield_kt: f64) -> SimResult<BlastData> {
    let yield_kt = validate_yield(yield_kt)?;
    Ok(blast_radii(yield_kt).rounded(RADIUS_DECIMALS))
}

/// Unrounded zone radii. No validation: callers pass a positive yield.
pub fn blast_radii(yield_kt: f64) -> BlastData {
    let cube_root = yield_kt.powf(CUBE_ROOT_EXPONENT);
    let thermal_scale = yield_kt.powf(THERMAL_EXPONENT);
    let radius = |zone: BlastZoneType, coeff: f64| {
        if zone.is_cube_root_scaled() {
            coeff * cube_root
        } else {
            coeff * thermal_scale
        }
    };

    BlastData {
        fireball: radius(BlastZoneType::Fireball, FIREBALL_COEFF),
        radiation: radius(BlastZoneType::Radiation, RADIATION_COEFF),
        heavy_blast: radius(BlastZoneType::HeavyBlast, HEAVY_BLAST_COEFF),
        moderate_blast: radius(BlastZoneType::ModerateBlast, MODERATE_BLAST_COEFF),
        light_blast: radius(BlastZoneType::LightBlast, LIGHT_BLAST_COEFF),
        thermal: radius(BlastZoneType::Thermal, THERMAL_COEFF),
    }
}
