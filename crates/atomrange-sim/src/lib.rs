//! Effects models for the Atomic Range estimator.
//!
//! Blast radii, casualty estimates and the wind-driven fallout plume,
//! tied together by a seeded [`Simulator`] that turns one detonation
//! request into a serializable report.

pub mod blast;
pub mod casualties;
pub mod config;
pub mod engine;
pub mod fallout;
pub mod wind;

pub use atomrange_core as core;
pub use config::{FalloutConfig, ModelConfig};
pub use engine::{SimulationReport, SimulationRequest, Simulator};
