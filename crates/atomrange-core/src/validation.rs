//! Input validation shared by every model entry point.

use crate::constants::{MAX_COUNTRY_NAME_LEN, MAX_YIELD_KT};
use crate::error::{SimError, SimResult};
use crate::types::WindConfig;

pub fn is_valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}

pub fn is_valid_coordinates(lat: f64, lon: f64) -> bool {
    is_valid_latitude(lat) && is_valid_longitude(lon)
}

/// Yield in `(0, 100000]` kt.
pub fn is_valid_yield(yield_kt: f64) -> bool {
    yield_kt.is_finite() && yield_kt > 0.0 && yield_kt <= MAX_YIELD_KT
}

pub fn validate_yield(yield_kt: f64) -> SimResult<f64> {
    if is_valid_yield(yield_kt) {
        Ok(yield_kt)
    } else {
        Err(SimError::InvalidYield(yield_kt))
    }
}

pub fn validate_coordinates(lat: f64, lon: f64) -> SimResult<()> {
    if is_valid_coordinates(lat, lon) {
        Ok(())
    } else {
        Err(SimError::InvalidCoordinates { lat, lon })
    }
}

pub fn validate_radius(radius_km: f64) -> SimResult<f64> {
    if radius_km.is_finite() && radius_km >= 0.0 {
        Ok(radius_km)
    } else {
        Err(SimError::InvalidRadius(radius_km))
    }
}

pub fn validate_density(density: f64) -> SimResult<f64> {
    if density.is_finite() && density >= 0.0 {
        Ok(density)
    } else {
        Err(SimError::InvalidDensity(density))
    }
}

/// Direction in `[0, 360)`, speed non-negative.
pub fn validate_wind(wind: &WindConfig) -> SimResult<()> {
    let direction_ok = wind.direction.is_finite() && (0.0..360.0).contains(&wind.direction);
    let speed_ok = wind.speed.is_finite() && wind.speed >= 0.0;
    if direction_ok && speed_ok {
        Ok(())
    } else {
        Err(SimError::InvalidWind {
            direction: wind.direction,
            speed: wind.speed,
        })
    }
}

/// Trim a free-text country name and check its length.
pub fn validate_country_name(name: &str) -> SimResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_COUNTRY_NAME_LEN {
        return Err(SimError::InvalidCountryName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yield_domain_edges() {
        assert!(is_valid_yield(0.001));
        assert!(is_valid_yield(MAX_YIELD_KT));
        assert!(!is_valid_yield(0.0));
        assert!(!is_valid_yield(-5.0));
        assert!(!is_valid_yield(MAX_YIELD_KT + 1.0));
        assert!(!is_valid_yield(f64::NAN));
        assert!(!is_valid_yield(f64::INFINITY));
        assert_eq!(validate_yield(0.0), Err(SimError::InvalidYield(0.0)));
    }

    #[test]
    fn coordinate_ranges() {
        assert!(is_valid_coordinates(90.0, 180.0));
        assert!(is_valid_coordinates(-90.0, -180.0));
        assert!(!is_valid_coordinates(90.5, 0.0));
        assert!(!is_valid_coordinates(0.0, -180.1));
        assert!(!is_valid_coordinates(f64::NAN, 0.0));
        assert!(matches!(
            validate_coordinates(100.0, 0.0),
            Err(SimError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn radius_and_density_reject_negative() {
        assert_eq!(validate_radius(0.0), Ok(0.0));
        assert_eq!(validate_radius(-1.0), Err(SimError::InvalidRadius(-1.0)));
        assert!(validate_radius(f64::INFINITY).is_err());
        assert_eq!(validate_density(-3.0), Err(SimError::InvalidDensity(-3.0)));
        assert!(validate_density(f64::NAN).is_err());
    }

    #[test]
    fn wind_direction_is_half_open() {
        assert!(validate_wind(&WindConfig::new(0.0, 0.0)).is_ok());
        assert!(validate_wind(&WindConfig::new(359.9, 30.0)).is_ok());
        assert!(validate_wind(&WindConfig::new(360.0, 30.0)).is_err());
        assert!(validate_wind(&WindConfig::new(-1.0, 30.0)).is_err());
        assert!(validate_wind(&WindConfig::new(90.0, -0.5)).is_err());
    }

    #[test]
    fn country_name_trimmed_and_bounded() {
        assert_eq!(validate_country_name("  Japan "), Ok("Japan".to_string()));
        assert!(validate_country_name("   ").is_err());
        assert!(validate_country_name(&"x".repeat(101)).is_err());
        assert!(validate_country_name(&"x".repeat(100)).is_ok());
    }
}
