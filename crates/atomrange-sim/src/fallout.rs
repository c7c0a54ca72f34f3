//! Wind-driven fallout plume.
//!
//! The plume is an ellipse whose near edge sits on ground zero and whose
//! major axis points downwind. Length grows with √yield and wind speed;
//! width is a random 10–20% of length, drawn from an injected RNG.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use atomrange_core::constants::*;
use atomrange_core::types::{FalloutPattern, LonLat, WindConfig};
use atomrange_core::validation::{
    validate_coordinates, validate_density, validate_wind, validate_yield,
};
use atomrange_core::{SimError, SimResult};
use atomrange_geo::geodesy::bearing_difference_deg;
use atomrange_geo::projection::{bearing_unit, PlanarProjection};

/// Width fraction must lie in `[0.1, 0.2)`.
pub fn validate_width_fraction(fraction: f64) -> SimResult<f64> {
    if (FALLOUT_MIN_WIDTH_FRACTION..FALLOUT_MAX_WIDTH_FRACTION).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(SimError::InvalidWidthFraction(fraction))
    }
}

/// Draw a width fraction uniformly from `[0.1, 0.2)`.
pub fn sample_width_fraction<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(FALLOUT_MIN_WIDTH_FRACTION..FALLOUT_MAX_WIDTH_FRACTION)
}

/// Draw a width fraction uniformly from a narrower band `[min, max)`.
///
/// The band must satisfy `0.1 <= min < max <= 0.2`; the RNG is untouched
/// when it does not.
pub fn sample_width_fraction_in<R: Rng + ?Sized>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> SimResult<f64> {
    let min = validate_width_fraction(min)?;
    if !(max > min && max <= FALLOUT_MAX_WIDTH_FRACTION) {
        return Err(SimError::InvalidWidthFraction(max));
    }
    Ok(rng.gen_range(min..max))
}

/// Plume for a detonation with an explicit width fraction.
pub fn compute_fallout_pattern(
    center_lat: f64,
    center_lon: f64,
    yield_kt: f64,
    wind: &WindConfig,
    width_fraction: f64,
) -> SimResult<FalloutPattern> {
    validate_coordinates(center_lat, center_lon)?;
    let yield_kt = validate_yield(yield_kt)?;
    validate_wind(wind)?;
    let width_fraction = validate_width_fraction(width_fraction)?;

    let base_length = FALLOUT_LENGTH_COEFF * yield_kt.sqrt();
    let wind_factor = wind.speed / FALLOUT_REFERENCE_WIND_KMH;
    let length = base_length * wind_factor;

    Ok(FalloutPattern {
        center_lat,
        center_lon,
        wind_direction: wind.direction,
        wind_speed: wind.speed,
        intensity: (yield_kt / FALLOUT_INTENSITY_SATURATION_KT).min(1.0),
        length,
        width: length * width_fraction,
    })
}

/// Plume for a detonation, drawing the width fraction from `rng`.
pub fn compute_fallout_pattern_with_rng<R: Rng + ?Sized>(
    center_lat: f64,
    center_lon: f64,
    yield_kt: f64,
    wind: &WindConfig,
    rng: &mut R,
) -> SimResult<FalloutPattern> {
    let fraction = sample_width_fraction(rng);
    compute_fallout_pattern(center_lat, center_lon, yield_kt, wind, fraction)
}

/// Radiation intensity in `[0, 1]` at a point.
///
/// Falls off linearly with planar distance (zero beyond the plume length)
/// and with angular deviation from the wind bearing (zero beyond 30°).
pub fn radiation_intensity_at(point_lat: f64, point_lon: f64, pattern: &FalloutPattern) -> f64 {
    if pattern.is_empty() {
        return 0.0;
    }

    let proj = PlanarProjection::new(pattern.center_lat, pattern.center_lon);
    let distance = proj.distance_km(point_lat, point_lon);
    let bearing = proj.bearing_deg(point_lat, point_lon);
    let angle_diff = bearing_difference_deg(bearing, pattern.wind_direction);

    // Negated comparisons also reject NaN.
    if !(angle_diff <= FALLOUT_CONE_HALF_ANGLE_DEG) || !(distance <= pattern.length) {
        return 0.0;
    }

    let distance_factor = 1.0 - distance / pattern.length;
    let angle_factor = 1.0 - angle_diff / FALLOUT_CONE_HALF_ANGLE_DEG;
    pattern.intensity * distance_factor * angle_factor
}

/// Closed `(lon, lat)` ring outlining the plume, 36 segments.
pub fn fallout_polygon(pattern: &FalloutPattern, scale: f64) -> SimResult<Vec<LonLat>> {
    fallout_polygon_with_segments(pattern, scale, FALLOUT_POLYGON_SEGMENTS)
}

/// Closed `(lon, lat)` ring of `segments + 1` points; the last repeats the first.
///
/// Half-axes are `length·scale/2` along the wind and `width·scale/2` across
/// it. The ellipse center sits one half-length downwind of ground zero.
pub fn fallout_polygon_with_segments(
    pattern: &FalloutPattern,
    scale: f64,
    segments: usize,
) -> SimResult<Vec<LonLat>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(SimError::InvalidScale(scale));
    }
    if segments < 3 {
        return Err(SimError::InvalidSegments(segments));
    }

    let proj = PlanarProjection::new(pattern.center_lat, pattern.center_lon);
    let along = bearing_unit(pattern.wind_direction);
    let across = along.perp();
    let half_length = pattern.length * scale / 2.0;
    let half_width = pattern.width * scale / 2.0;
    let ellipse_center = along * half_length;

    let mut ring: Vec<LonLat> = (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            let offset = ellipse_center
                + along * (half_length * theta.cos())
                + across * (half_width * theta.sin());
            proj.to_geo(offset)
        })
        .collect();
    ring.push(ring[0]);

    Ok(ring)
}

/// Fallout fatalities over the plume ellipse (`π × length × width`).
pub fn fallout_casualties(pattern: &FalloutPattern, density: f64) -> SimResult<u64> {
    let density = validate_density(density)?;
    let area = PI * pattern.length * pattern.width;
    let population = area * density;

    let fatality_rate = if pattern.intensity > FALLOUT_HIGH_INTENSITY {
        FALLOUT_HIGH_FATALITY_RATE
    } else if pattern.intensity > FALLOUT_MEDIUM_INTENSITY {
        FALLOUT_MEDIUM_FATALITY_RATE
    } else {
        FALLOUT_LOW_FATALITY_RATE
    };

    Ok((population * fatality_rate).round() as u64)
}
