//! Geography for the Atomic Range estimator.
//!
//! Great-circle distances, the flat-earth plume projection,
//! and population density lookup.

pub use atomrange_core as core;

pub mod geodesy;
pub mod population;
pub mod projection;
pub mod resolver;

// Re-export key types for convenience.
pub use geodesy::haversine_km;
pub use population::{population_table, EntryKind, PopulationEntry};
pub use projection::PlanarProjection;
pub use resolver::{density_at, resolve_density, DensityResolver};
