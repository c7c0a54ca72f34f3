//! Model constants and tuning parameters.

// --- Yield domain ---

/// Largest accepted yield in kilotons (Tsar Bomba design maximum).
pub const MAX_YIELD_KT: f64 = 100_000.0;

// --- Blast scaling ---

/// Exponent for overpressure-driven zones (cube-root scaling).
pub const CUBE_ROOT_EXPONENT: f64 = 1.0 / 3.0;

/// Empirical exponent for thermal and prompt-radiation zones.
pub const THERMAL_EXPONENT: f64 = 0.41;

/// Fireball radius coefficient (km per kt^1/3).
pub const FIREBALL_COEFF: f64 = 0.11;

/// Prompt radiation radius coefficient (km per kt^0.41).
pub const RADIATION_COEFF: f64 = 1.2;

/// Heavy blast (20 psi) radius coefficient (km per kt^1/3).
pub const HEAVY_BLAST_COEFF: f64 = 0.28;

/// Moderate blast (5 psi) radius coefficient (km per kt^1/3).
pub const MODERATE_BLAST_COEFF: f64 = 0.62;

/// Light blast (1 psi) radius coefficient (km per kt^1/3).
pub const LIGHT_BLAST_COEFF: f64 = 1.5;

/// Thermal radiation radius coefficient (km per kt^0.41).
pub const THERMAL_COEFF: f64 = 3.5;

/// Radii are reported to this many decimal places.
pub const RADIUS_DECIMALS: i32 = 2;

// --- Geodesy ---

/// Mean Earth radius in kilometers (Haversine).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough kilometers per degree used by the planar fallout approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

// --- Population ---

/// Density used when neither a city nor a country matches (people/km²).
pub const GLOBAL_AVERAGE_DENSITY: f64 = 50.0;

/// Display name for the global fallback.
pub const GLOBAL_AVERAGE_NAME: &str = "Global Average";

/// Longest accepted country name (characters, after trimming).
pub const MAX_COUNTRY_NAME_LEN: usize = 100;

// --- Aggregate casualty model ---

/// Fatality rate applied to the whole thermal footprint.
pub const AGGREGATE_FATALITY_RATE: f64 = 0.25;

/// Injury rate applied to the whole thermal footprint.
pub const AGGREGATE_INJURY_RATE: f64 = 0.45;

/// Infrastructure damage baseline for the whole footprint (%).
pub const AGGREGATE_INFRASTRUCTURE_DAMAGE: u8 = 75;

// --- Fallout ---

/// Plume base length coefficient (km per kt^0.5).
pub const FALLOUT_LENGTH_COEFF: f64 = 2.0;

/// Wind speed that leaves the base plume length unchanged (km/h).
pub const FALLOUT_REFERENCE_WIND_KMH: f64 = 20.0;

/// Yield at which plume intensity saturates at 1.0 (kt).
pub const FALLOUT_INTENSITY_SATURATION_KT: f64 = 1000.0;

/// Smallest plume width as a fraction of its length (inclusive).
pub const FALLOUT_MIN_WIDTH_FRACTION: f64 = 0.1;

/// Largest plume width as a fraction of its length (exclusive).
pub const FALLOUT_MAX_WIDTH_FRACTION: f64 = 0.2;

/// Half-angle of the downwind cone that receives fallout (degrees).
pub const FALLOUT_CONE_HALF_ANGLE_DEG: f64 = 30.0;

/// Segments used to approximate the plume ellipse.
pub const FALLOUT_POLYGON_SEGMENTS: usize = 36;

/// Intensity above which the high fallout fatality rate applies.
pub const FALLOUT_HIGH_INTENSITY: f64 = 0.7;

/// Intensity above which the medium fallout fatality rate applies.
pub const FALLOUT_MEDIUM_INTENSITY: f64 = 0.3;

pub const FALLOUT_HIGH_FATALITY_RATE: f64 = 0.8;
pub const FALLOUT_MEDIUM_FATALITY_RATE: f64 = 0.4;
pub const FALLOUT_LOW_FATALITY_RATE: f64 = 0.1;

// --- Wind ---

/// Slowest randomly generated wind (km/h, inclusive).
pub const RANDOM_WIND_MIN_KMH: f64 = 10.0;

/// Width of the random wind speed band (km/h).
pub const RANDOM_WIND_SPAN_KMH: f64 = 40.0;
