//! Error type for the effects model.

use thiserror::Error;

/// Input validation failures. Every variant is detected at the entry of the
/// function that received the bad value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Yield outside `(0, 100000]` kt or not finite.
    #[error("Invalid yield: {0} kt (must be in (0, 100000])")]
    InvalidYield(f64),

    /// Latitude outside `[-90, 90]`, longitude outside `[-180, 180]`, or either not finite.
    #[error("Invalid coordinates: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    /// Negative or non-finite radius.
    #[error("Invalid radius: {0} km")]
    InvalidRadius(f64),

    /// Negative or non-finite population density.
    #[error("Invalid population density: {0} people/km²")]
    InvalidDensity(f64),

    /// Direction outside `[0, 360)`, negative speed, or non-finite values.
    #[error("Invalid wind: direction {direction}°, speed {speed} km/h")]
    InvalidWind { direction: f64, speed: f64 },

    /// Plume width fraction outside `[0.1, 0.2)`.
    #[error("Invalid fallout width fraction: {0} (must be in [0.1, 0.2))")]
    InvalidWidthFraction(f64),

    /// Non-positive or non-finite polygon scale.
    #[error("Invalid polygon scale: {0}")]
    InvalidScale(f64),

    /// Fewer than three polygon segments.
    #[error("Invalid polygon segment count: {0} (need at least 3)")]
    InvalidSegments(usize),

    /// Country name empty after trimming or too long.
    #[error("Invalid country name: {0:?}")]
    InvalidCountryName(String),

    /// Bomb id not present in the catalog.
    #[error("Unknown bomb: {0}")]
    UnknownBomb(String),

    /// Model configuration that violates its own invariants.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for model operations.
pub type SimResult<T> = Result<T, SimError>;
