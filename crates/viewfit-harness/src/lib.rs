//! Deterministic verification harness for the viewfit size machine.
//!
//! Scripted scenarios with mandatory oracle verification, an independent
//! reference model for model-based property tests, and a seeded event walk
//! for reproducible randomized runs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scenario;
pub mod walk;

pub use model::ReferenceModel;
pub use walk::EventWalk;
