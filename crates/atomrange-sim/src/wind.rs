//! Wind sources: seeded random wind, a deterministic stand-in for live
//! weather, and compass naming.

use rand::Rng;

use atomrange_core::constants::{RANDOM_WIND_MIN_KMH, RANDOM_WIND_SPAN_KMH};
use atomrange_core::types::{WeatherReading, WindConfig};
use atomrange_core::validation::validate_coordinates;
use atomrange_core::SimResult;

const COMPASS_POINTS: [&str; 8] = [
    "North",
    "Northeast",
    "East",
    "Southeast",
    "South",
    "Southwest",
    "West",
    "Northwest",
];

/// Random wind: whole-degree direction in `[0, 360)`, whole km/h speed in `[10, 50)`.
pub fn generate_random_wind<R: Rng + ?Sized>(rng: &mut R) -> WindConfig {
    let direction = rng.gen_range(0..360) as f64;
    let speed = (RANDOM_WIND_MIN_KMH + rng.gen::<f64>() * RANDOM_WIND_SPAN_KMH).floor();
    WindConfig::new(direction, speed)
}

/// Eight-point compass name for a bearing in degrees.
pub fn wind_direction_name(degrees: f64) -> &'static str {
    let index = (degrees.rem_euclid(360.0) / 45.0).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Deterministic mock of a live weather feed, derived from the coordinates.
///
/// Stands in for a network weather service; the same point always reports
/// the same conditions.
pub fn simulated_weather(lat: f64, lon: f64) -> SimResult<WeatherReading> {
    validate_coordinates(lat, lon)?;
    let seed = (lat + lon).abs();

    Ok(WeatherReading {
        wind_speed: (5.0 + seed % 25.0).round(),
        wind_direction: ((seed * 10.0) % 360.0).round() % 360.0,
        temperature: 20.0 + seed % 15.0,
        description: "Clear Sky (Simulated)".to_string(),
    })
}
