//! Model configuration.
//!
//! Every field has a default; a JSON file only needs the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use atomrange_core::constants::{
    FALLOUT_MAX_WIDTH_FRACTION, FALLOUT_MIN_WIDTH_FRACTION, FALLOUT_POLYGON_SEGMENTS,
    GLOBAL_AVERAGE_DENSITY,
};
use atomrange_core::{SimError, SimResult};

/// Fallout plume tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FalloutConfig {
    /// Lower bound of the random width fraction (inclusive).
    pub min_width_fraction: f64,
    /// Upper bound of the random width fraction (exclusive).
    pub max_width_fraction: f64,
    /// Segments in the plume polygon ring.
    pub polygon_segments: usize,
    /// Scale applied to the plume polygon.
    pub polygon_scale: f64,
}

impl Default for FalloutConfig {
    fn default() -> Self {
        Self {
            min_width_fraction: FALLOUT_MIN_WIDTH_FRACTION,
            max_width_fraction: FALLOUT_MAX_WIDTH_FRACTION,
            polygon_segments: FALLOUT_POLYGON_SEGMENTS,
            polygon_scale: 1.0,
        }
    }
}

/// Configuration for a [`crate::Simulator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// RNG seed. Same seed = same reports.
    pub seed: u64,
    /// Density used when no city or country matches (people/km²).
    pub global_density: f64,
    pub fallout: FalloutConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            global_density: GLOBAL_AVERAGE_DENSITY,
            fallout: FalloutConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> SimResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.global_density.is_finite() && self.global_density >= 0.0) {
            return Err(SimError::Config(format!(
                "global_density must be non-negative, got {}",
                self.global_density
            )));
        }

        let f = &self.fallout;
        let in_band = |v: f64| (FALLOUT_MIN_WIDTH_FRACTION..=FALLOUT_MAX_WIDTH_FRACTION).contains(&v);
        if !in_band(f.min_width_fraction)
            || !in_band(f.max_width_fraction)
            || f.min_width_fraction >= f.max_width_fraction
        {
            return Err(SimError::Config(format!(
                "width fractions must satisfy {FALLOUT_MIN_WIDTH_FRACTION} <= min < max <= \
                 {FALLOUT_MAX_WIDTH_FRACTION}, got [{}, {})",
                f.min_width_fraction, f.max_width_fraction
            )));
        }
        if f.polygon_segments < 3 {
            return Err(SimError::Config(format!(
                "polygon_segments must be at least 3, got {}",
                f.polygon_segments
            )));
        }
        if !(f.polygon_scale.is_finite() && f.polygon_scale > 0.0) {
            return Err(SimError::Config(format!(
                "polygon_scale must be positive, got {}",
                f.polygon_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ModelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallout.polygon_segments, 36);
        assert_eq!(config.global_density, 50.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ModelConfig::from_json(r#"{"seed": 7, "fallout": {"polygon_segments": 72}}"#)
            .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.fallout.polygon_segments, 72);
        assert_eq!(config.fallout.min_width_fraction, 0.1);
        assert_eq!(config.global_density, 50.0);
    }

    #[test]
    fn rejects_inverted_width_band() {
        let err = ModelConfig::from_json(
            r#"{"fallout": {"min_width_fraction": 0.18, "max_width_fraction": 0.12}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_band_outside_model_range() {
        let mut config = ModelConfig::default();
        config.fallout.max_width_fraction = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_polygon() {
        let mut config = ModelConfig::default();
        config.fallout.polygon_segments = 2;
        assert!(config.validate().is_err());
        config.fallout.polygon_segments = 36;
        config.fallout.polygon_scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ModelConfig::from_json("{not json"),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let config = ModelConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = ModelConfig::from_json(&json).unwrap();
        assert_eq!(back.seed, config.seed);
        assert_eq!(back.fallout.polygon_scale, config.fallout.polygon_scale);
    }
}
