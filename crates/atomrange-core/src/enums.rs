//! Enumeration types used throughout the model.

use serde::{Deserialize, Serialize};

/// Effect zone around ground zero, ordered from smallest to largest radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlastZoneType {
    /// Vaporization inside the fireball.
    Fireball,
    /// Prompt ionizing radiation (500 rem).
    Radiation,
    /// 20 psi overpressure: reinforced concrete destroyed.
    HeavyBlast,
    /// 5 psi overpressure: most residential buildings collapse.
    ModerateBlast,
    /// 1 psi overpressure: windows shatter.
    LightBlast,
    /// Third-degree burns on exposed skin.
    Thermal,
}

impl BlastZoneType {
    /// Every zone, in radius order.
    pub const ALL: [BlastZoneType; 6] = [
        Self::Fireball,
        Self::Radiation,
        Self::HeavyBlast,
        Self::ModerateBlast,
        Self::LightBlast,
        Self::Thermal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fireball => "Fireball",
            Self::Radiation => "Radiation",
            Self::HeavyBlast => "Heavy Blast",
            Self::ModerateBlast => "Moderate Blast",
            Self::LightBlast => "Light Blast",
            Self::Thermal => "Thermal Radiation",
        }
    }

    /// Peak overpressure bounding the zone (psi). `None` for zones that are
    /// not overpressure-driven.
    pub fn overpressure_psi(&self) -> Option<f64> {
        match self {
            Self::Fireball => Some(200.0),
            Self::HeavyBlast => Some(20.0),
            Self::ModerateBlast => Some(5.0),
            Self::LightBlast => Some(1.0),
            Self::Radiation | Self::Thermal => None,
        }
    }

    /// Fraction of the zone's population killed.
    pub fn fatality_rate(&self) -> f64 {
        match self {
            Self::Fireball => 1.0,
            Self::Radiation => 0.9,
            Self::HeavyBlast => 0.8,
            Self::ModerateBlast => 0.4,
            Self::LightBlast => 0.05,
            Self::Thermal => 0.25,
        }
    }

    /// Fraction of the zone's population injured.
    pub fn injury_rate(&self) -> f64 {
        match self {
            Self::Fireball => 0.0,
            Self::Radiation => 0.1,
            Self::HeavyBlast => 0.15,
            Self::ModerateBlast => 0.45,
            Self::LightBlast => 0.35,
            Self::Thermal => 0.55,
        }
    }

    /// Infrastructure destroyed inside the zone (%).
    pub fn infrastructure_damage(&self) -> u8 {
        match self {
            Self::Fireball => 100,
            Self::Radiation => 10,
            Self::HeavyBlast => 90,
            Self::ModerateBlast => 60,
            Self::LightBlast => 20,
            Self::Thermal => 15,
        }
    }

    /// Whether the radius scales with yield^1/3 (true) or yield^0.41.
    pub fn is_cube_root_scaled(&self) -> bool {
        !matches!(self, Self::Radiation | Self::Thermal)
    }

    /// Map fill color as a hex string.
    pub fn display_color(&self) -> &'static str {
        match self {
            Self::Fireball => "#ffd54f",
            Self::Radiation => "#76ff03",
            Self::HeavyBlast => "#d32f2f",
            Self::ModerateBlast => "#f57c00",
            Self::LightBlast => "#9e9e9e",
            Self::Thermal => "#ff8a65",
        }
    }

    /// Map fill opacity in `[0, 1]`.
    pub fn display_opacity(&self) -> f64 {
        match self {
            Self::Fireball => 0.8,
            Self::Radiation => 0.35,
            Self::HeavyBlast => 0.5,
            Self::ModerateBlast => 0.4,
            Self::LightBlast => 0.3,
            Self::Thermal => 0.25,
        }
    }
}

/// Where a resolved population density came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensitySource {
    /// Inside a named city's coverage radius.
    City,
    /// Country average from the supplied country name.
    Country,
    /// No match; global average.
    Global,
}

impl DensitySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Country => "country",
            Self::Global => "global",
        }
    }
}

/// Historical event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Warfare,
    Test,
    Accident,
}
