//! Core types and definitions for the Atomic Range effects estimator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! zone enums, value types, constants, the error type, input validation,
//! and the static bomb catalog / historical event tables.
//! It has no dependency on any runtime or presentation framework.

pub mod catalog;
pub mod constants;
pub mod enums;
pub mod error;
pub mod types;
pub mod validation;

pub use error::{SimError, SimResult};
